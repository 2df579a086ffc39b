use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::author::entities::Author;
use crate::entity::authors::{ActiveModel as AuthorActiveModel, Model as AuthorModel};

impl From<AuthorModel> for Author {
    fn from(model: AuthorModel) -> Self {
        Author {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth.with_timezone(&Utc),
            date_of_death: model.date_of_death.map(|dt| dt.with_timezone(&Utc)),
            main_category: model.main_category,
        }
    }
}

impl From<&AuthorModel> for Author {
    fn from(model: &AuthorModel) -> Self {
        Author::from(model.clone())
    }
}

impl From<&Author> for AuthorActiveModel {
    fn from(author: &Author) -> Self {
        AuthorActiveModel {
            id: Set(author.id),
            first_name: Set(author.first_name.clone()),
            last_name: Set(author.last_name.clone()),
            date_of_birth: Set(author.date_of_birth.fixed_offset()),
            date_of_death: Set(author.date_of_death.map(|dt| dt.fixed_offset())),
            main_category: Set(author.main_category.clone()),
        }
    }
}
