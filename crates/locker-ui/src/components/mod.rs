pub mod card;
pub mod document_card;
pub mod footer;
pub mod guard;
pub mod header;
pub mod toast;
