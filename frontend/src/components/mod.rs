pub mod access_info;
pub mod book_edit;
pub mod intake;
pub mod welcome_book;
