pub mod admin;
pub mod document_detail;
pub mod document_form;
pub mod documents;
pub mod home;
pub mod login;
pub mod moderator;
pub mod not_found;
pub mod register;
