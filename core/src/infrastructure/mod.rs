pub mod author;
pub mod course;
pub mod db;
pub mod health;
pub mod in_memory;
pub mod repositories;
