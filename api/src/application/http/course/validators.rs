use std::borrow::Cow;

use course_library_core::domain::course::{
    entities::{Course, DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH},
    value_objects::{CreateCourseInput, UpdateCourseInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const TITLE_MAX_LENGTH_U64: u64 = TITLE_MAX_LENGTH as u64;
const DESCRIPTION_MAX_LENGTH_U64: u64 = DESCRIPTION_MAX_LENGTH as u64;

fn title_differs_from_description(
    title: &str,
    description: Option<&str>,
) -> Result<(), ValidationError> {
    if description == Some(title) {
        return Err(ValidationError::new("title_equals_description").with_message(
            Cow::Borrowed("The provided description should be different from the title."),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_course"))]
pub struct CreateCourseValidator {
    #[validate(length(
        min = 1,
        max = TITLE_MAX_LENGTH_U64,
        message = "You should fill out a title of at most 100 characters."
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(
        max = DESCRIPTION_MAX_LENGTH_U64,
        message = "The description shouldn't have more than 1500 characters."
    ))]
    pub description: Option<String>,
}

fn validate_create_course(course: &CreateCourseValidator) -> Result<(), ValidationError> {
    title_differs_from_description(&course.title, course.description.as_deref())
}

impl From<CreateCourseValidator> for CreateCourseInput {
    fn from(validator: CreateCourseValidator) -> Self {
        CreateCourseInput {
            title: validator.title,
            description: validator.description,
        }
    }
}

/// Update representation of a course. PATCH documents are applied to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_course"))]
pub struct UpdateCourseValidator {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = TITLE_MAX_LENGTH_U64,
        message = "You should fill out a title of at most 100 characters."
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(
        max = DESCRIPTION_MAX_LENGTH_U64,
        message = "The description shouldn't have more than 1500 characters."
    ))]
    pub description: Option<String>,
}

fn validate_update_course(course: &UpdateCourseValidator) -> Result<(), ValidationError> {
    title_differs_from_description(&course.title, course.description.as_deref())
}

impl From<&Course> for UpdateCourseValidator {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
        }
    }
}

impl From<UpdateCourseValidator> for UpdateCourseInput {
    fn from(validator: UpdateCourseValidator) -> Self {
        UpdateCourseInput {
            title: validator.title,
            description: validator.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_must_differ_from_description() {
        let course = CreateCourseValidator {
            title: "Knots".to_string(),
            description: Some("Knots".to_string()),
        };

        let errors = course.validate().unwrap_err();

        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn test_description_is_optional_but_bounded() {
        let mut course = UpdateCourseValidator {
            title: "Knots".to_string(),
            description: None,
        };
        assert!(course.validate().is_ok());

        course.description = Some("x".repeat(DESCRIPTION_MAX_LENGTH + 1));
        let errors = course.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_empty_update_representation_is_invalid() {
        let errors = UpdateCourseValidator::default().validate().unwrap_err();

        assert!(errors.field_errors().contains_key("title"));
    }
}
