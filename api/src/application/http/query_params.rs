use course_library_core::domain::query::paging::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Query string of `GET /api/authors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AuthorsResourceParameters {
    /// Exact main category to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_category: Option<String>,
    /// Text searched in main category, first name and last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// e.g. `name`, `age desc, mainCategory`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    /// Comma separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl AuthorsResourceParameters {
    pub fn page_request(&self, max_page_size: u64) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size, max_page_size)
    }

    /// Same query pointed at another page, with the effective paging made explicit.
    pub fn for_page(&self, page: PageRequest) -> Self {
        Self {
            page_number: Some(page.page_number),
            page_size: Some(page.page_size),
            ..self.clone()
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FieldsParameters {
    /// Comma separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}
