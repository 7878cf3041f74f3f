pub mod header;
pub mod lecture_card;
pub mod lecture_grid;
pub mod lectures_section;
