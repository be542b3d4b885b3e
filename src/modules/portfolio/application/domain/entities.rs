pub const MAX_TITLE_LEN: usize = 150;
pub const MAX_DESCRIPTION_LEN: usize = 5000;
pub const MAX_CATEGORY_LEN: usize = 60;
pub const MAX_TECHNOLOGIES: usize = 20;
pub const MAX_TECHNOLOGY_LEN: usize = 50;
pub const MAX_IMAGES: usize = 20;
