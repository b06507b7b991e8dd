pub mod book_detail;
pub mod book_list;
pub mod header;
pub mod search_overlay;
pub mod settings_overlay;
