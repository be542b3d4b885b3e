pub mod delete_contact;
pub mod list_contacts;
pub mod mark_contact_read;
pub mod submit_contact;
