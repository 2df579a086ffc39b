use crate::domain::course::entities::Course;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourseInput {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCourseInput {
    pub title: String,
    pub description: Option<String>,
}

/// Result of a PUT/PATCH against a course id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(Course),
    Updated(Course),
}

impl UpsertOutcome {
    pub fn course(&self) -> &Course {
        match self {
            UpsertOutcome::Created(course) | UpsertOutcome::Updated(course) => course,
        }
    }
}
