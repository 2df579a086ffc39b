pub mod author_options;
pub mod create_author;
pub mod delete_author;
pub mod get_author;
pub mod get_authors;
