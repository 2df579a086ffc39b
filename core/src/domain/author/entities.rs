use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    author::value_objects::CreateAuthorInput,
    common::generate_uuid_v7,
    course::entities::Course,
    query::sort::{SortValue, Sortable},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub date_of_death: Option<DateTime<Utc>>,
    pub main_category: String,
}

/// Storage fields an author can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    MainCategory,
}

impl Author {
    /// Build a new author and its nested courses, each with a freshly generated id.
    pub fn new(input: CreateAuthorInput) -> (Self, Vec<Course>) {
        let author = Self {
            id: generate_uuid_v7(),
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            date_of_death: input.date_of_death,
            main_category: input.main_category,
        };

        let courses = input
            .courses
            .into_iter()
            .map(|course| Course::new(author.id, course.title, course.description))
            .collect();

        (author, courses)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years, at death for deceased authors.
    pub fn age_at(&self, now: DateTime<Utc>) -> i32 {
        let until = self.date_of_death.unwrap_or(now);
        let mut age = until.year() - self.date_of_birth.year();

        if (until.month(), until.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }

        age
    }

    pub fn age(&self) -> i32 {
        self.age_at(Utc::now())
    }
}

impl Sortable for Author {
    type Field = AuthorField;

    fn sort_value(&self, field: AuthorField) -> SortValue {
        match field {
            AuthorField::Id => SortValue::Uuid(self.id),
            AuthorField::FirstName => SortValue::text(&self.first_name),
            AuthorField::LastName => SortValue::text(&self.last_name),
            AuthorField::DateOfBirth => SortValue::DateTime(self.date_of_birth),
            AuthorField::MainCategory => SortValue::text(&self.main_category),
        }
    }
}
