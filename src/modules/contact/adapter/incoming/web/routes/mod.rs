mod manage_contacts;
mod submit_contact;

pub use manage_contacts::{
    delete_contact_handler, list_contacts_handler, mark_contact_read_handler,
    ListContactsQuery, MarkReadRequest,
};
pub use submit_contact::{__path_submit_contact_handler, submit_contact_handler, SubmitContactRequest};
