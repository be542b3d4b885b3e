mod manage_services;
mod public_services;

pub use manage_services::{
    create_service_handler, delete_service_handler, list_all_services_handler,
    patch_service_handler, CreateServiceRequest, PatchServiceRequest,
};
pub use public_services::{__path_list_services_handler, list_services_handler};
