pub mod author_collection_options;
pub mod create_author_collection;
pub mod get_author_collection;
