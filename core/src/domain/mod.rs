pub mod author;
pub mod common;
pub mod course;
pub mod health;
pub mod query;
