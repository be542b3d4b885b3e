pub mod html;
pub mod ports;
