use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        course::{entities::Course, ports::CourseRepository},
    },
    entity::courses::{ActiveModel as CourseActiveModel, Column, Entity as CourseEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresCourseRepository {
    pub db: DatabaseConnection,
}

impl PostgresCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CourseRepository for PostgresCourseRepository {
    async fn get_courses(&self, author_id: Uuid) -> Result<Vec<Course>, CoreError> {
        let courses = CourseEntity::find()
            .filter(Column::AuthorId.eq(author_id))
            .order_by_asc(Column::Title)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch courses for author: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Course::from)
            .collect::<Vec<Course>>();

        Ok(courses)
    }

    async fn get_course(&self, author_id: Uuid, course_id: Uuid) -> Result<Option<Course>, CoreError> {
        let course = CourseEntity::find()
            .filter(Column::Id.eq(course_id))
            .filter(Column::AuthorId.eq(author_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get course by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Course::from);

        Ok(course)
    }

    async fn course_exists(&self, course_id: Uuid) -> Result<bool, CoreError> {
        let count = CourseEntity::find()
            .filter(Column::Id.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check course existence: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn create_course(&self, course: Course) -> Result<Course, CoreError> {
        let created_course = CourseEntity::insert(CourseActiveModel::from(&course))
            .exec_with_returning(&self.db)
            .await
            .map(Course::from)
            .map_err(|e| {
                error!("Failed to create course: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created_course)
    }

    async fn update_course(&self, course: Course) -> Result<Course, CoreError> {
        let updated_course = CourseEntity::update(CourseActiveModel::from(&course))
            .filter(Column::AuthorId.eq(course.author_id))
            .exec(&self.db)
            .await
            .map(Course::from)
            .map_err(|e| {
                error!("Failed to update course: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated_course)
    }

    async fn delete_course(&self, author_id: Uuid, course_id: Uuid) -> Result<(), CoreError> {
        CourseEntity::delete_many()
            .filter(Column::Id.eq(course_id))
            .filter(Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete course: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
