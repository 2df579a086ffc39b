pub mod author;
pub mod author_collection;
pub mod course;
pub mod health;
pub mod links;
pub mod media_type;
pub mod query_extractor;
pub mod query_params;
pub mod root;
pub mod server;
