use sea_orm::ActiveValue::Set;

use crate::domain::course::entities::Course;
use crate::entity::courses::{ActiveModel as CourseActiveModel, Model as CourseModel};

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            description: model.description,
        }
    }
}

impl From<&CourseModel> for Course {
    fn from(model: &CourseModel) -> Self {
        Course::from(model.clone())
    }
}

impl From<&Course> for CourseActiveModel {
    fn from(course: &Course) -> Self {
        CourseActiveModel {
            id: Set(course.id),
            author_id: Set(course.author_id),
            title: Set(course.title.clone()),
            description: Set(course.description.clone()),
        }
    }
}
