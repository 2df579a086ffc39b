pub mod mappers;
pub mod repositories;

pub use repositories::course_repository::PostgresCourseRepository;
