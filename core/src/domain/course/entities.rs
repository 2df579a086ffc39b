use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

pub const TITLE_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl Course {
    pub fn new(author_id: Uuid, title: String, description: Option<String>) -> Self {
        Self::with_id(generate_uuid_v7(), author_id, title, description)
    }

    /// Course whose id was chosen by the client (upsert through PUT/PATCH).
    pub fn with_id(id: Uuid, author_id: Uuid, title: String, description: Option<String>) -> Self {
        Self {
            id,
            author_id,
            title,
            description,
        }
    }

    /// Replace the mutable fields. `id` and `author_id` never change.
    pub fn update(&mut self, title: String, description: Option<String>) {
        self.title = title;
        self.description = description;
    }
}
