use chrono::{DateTime, Utc};
use course_library_core::domain::{
    author::value_objects::CreateAuthorInput, course::value_objects::CreateCourseInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::course::validators::CreateCourseValidator;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorValidator {
    #[validate(length(min = 1, max = 50, message = "first name is required and at most 50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "last name is required and at most 50 characters"))]
    pub last_name: String,

    pub date_of_birth: DateTime<Utc>,

    /// Only honoured with the date-of-death creation media type.
    #[serde(default)]
    pub date_of_death: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 50, message = "main category is required and at most 50 characters"))]
    pub main_category: String,

    #[serde(default)]
    #[validate(nested)]
    pub courses: Vec<CreateCourseValidator>,
}

impl CreateAuthorValidator {
    pub fn into_input(self, with_date_of_death: bool) -> CreateAuthorInput {
        CreateAuthorInput {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            date_of_death: if with_date_of_death {
                self.date_of_death
            } else {
                None
            },
            main_category: self.main_category,
            courses: self
                .courses
                .into_iter()
                .map(CreateCourseInput::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "firstName": "Jaimy",
            "lastName": "Johnson",
            "dateOfBirth": "1981-07-11T00:00:00+02:00",
            "dateOfDeath": "2020-01-01T00:00:00Z",
            "mainCategory": "Navigation",
            "courses": [{ "title": "Reading the stars" }]
        })
    }

    #[test]
    fn test_date_of_death_depends_on_media_type() {
        let validator: CreateAuthorValidator = serde_json::from_value(payload()).unwrap();

        assert!(validator.clone().into_input(true).date_of_death.is_some());
        assert!(validator.into_input(false).date_of_death.is_none());
    }

    #[test]
    fn test_nested_course_is_validated() {
        let mut value = payload();
        value["courses"][0]["title"] = serde_json::json!("");
        let validator: CreateAuthorValidator = serde_json::from_value(value).unwrap();

        let errors = validator.validate().unwrap_err();

        assert!(errors.errors().contains_key("courses"));
    }

    #[test]
    fn test_name_length_is_bounded() {
        let mut value = payload();
        value["lastName"] = serde_json::json!("x".repeat(51));
        let validator: CreateAuthorValidator = serde_json::from_value(value).unwrap();

        let errors = validator.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("last_name"));
    }
}
