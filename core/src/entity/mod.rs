//! sea-orm entities for the `authors` and `courses` tables.

pub mod authors;
pub mod courses;
