use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    author::entities::AuthorField,
    course::value_objects::CreateCourseInput,
    query::{paging::PageRequest, sort::SortInstruction},
};

/// Raw list request as received from a client.
#[derive(Debug, Clone, Default)]
pub struct GetAuthorsInput {
    pub main_category: Option<String>,
    pub search_query: Option<String>,
    pub order_by: Option<String>,
    pub page: PageRequest,
}

/// List request translated to storage terms.
#[derive(Debug, Clone, Default)]
pub struct AuthorsFilter {
    pub main_category: Option<String>,
    pub search_query: Option<String>,
    pub sort: Vec<SortInstruction<AuthorField>>,
    pub page: PageRequest,
}

impl AuthorsFilter {
    /// Trimmed, non-blank category to match exactly.
    pub fn main_category(&self) -> Option<&str> {
        non_blank(self.main_category.as_deref())
    }

    /// Trimmed, non-blank text to search for.
    pub fn search_query(&self) -> Option<&str> {
        non_blank(self.search_query.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[derive(Debug, Clone)]
pub struct CreateAuthorInput {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub date_of_death: Option<DateTime<Utc>>,
    pub main_category: String,
    pub courses: Vec<CreateCourseInput>,
}

#[derive(Debug, Clone)]
pub struct GetAuthorCollectionInput {
    pub ids: Vec<Uuid>,
}
