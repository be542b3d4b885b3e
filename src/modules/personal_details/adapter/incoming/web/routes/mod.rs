mod personal_details;

pub use personal_details::{
    __path_get_personal_details_handler, get_personal_details_handler,
    upsert_personal_details_handler, PersonalDetailsRequest,
};
