use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    author::entities::Author,
    query::shaping::{FieldDescriptor, Shapeable},
};

/// Friendly author representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub main_category: String,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.full_name(),
            age: author.age(),
            main_category: author.main_category.clone(),
        }
    }
}

const AUTHOR_VIEW_FIELDS: &[FieldDescriptor<AuthorView>] = &[
    FieldDescriptor {
        name: "id",
        accessor: |a| json!(a.id),
    },
    FieldDescriptor {
        name: "name",
        accessor: |a| json!(a.name),
    },
    FieldDescriptor {
        name: "age",
        accessor: |a| json!(a.age),
    },
    FieldDescriptor {
        name: "mainCategory",
        accessor: |a| json!(a.main_category),
    },
];

impl Shapeable for AuthorView {
    fn field_descriptors() -> &'static [FieldDescriptor<Self>] {
        AUTHOR_VIEW_FIELDS
    }
}

/// Full author representation, returned for `vnd.marvin.author.full` requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorFullView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub date_of_death: Option<DateTime<Utc>>,
    pub main_category: String,
}

impl From<&Author> for AuthorFullView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
            main_category: author.main_category.clone(),
        }
    }
}

const AUTHOR_FULL_VIEW_FIELDS: &[FieldDescriptor<AuthorFullView>] = &[
    FieldDescriptor {
        name: "id",
        accessor: |a| json!(a.id),
    },
    FieldDescriptor {
        name: "firstName",
        accessor: |a| json!(a.first_name),
    },
    FieldDescriptor {
        name: "lastName",
        accessor: |a| json!(a.last_name),
    },
    FieldDescriptor {
        name: "dateOfBirth",
        accessor: |a| json!(a.date_of_birth),
    },
    FieldDescriptor {
        name: "dateOfDeath",
        accessor: |a| json!(a.date_of_death),
    },
    FieldDescriptor {
        name: "mainCategory",
        accessor: |a| json!(a.main_category),
    },
];

impl Shapeable for AuthorFullView {
    fn field_descriptors() -> &'static [FieldDescriptor<Self>] {
        AUTHOR_FULL_VIEW_FIELDS
    }
}
