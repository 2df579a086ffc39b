use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    course::{
        entities::Course,
        value_objects::{CreateCourseInput, UpdateCourseInput, UpsertOutcome},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait CourseService: Send + Sync {
    /// Courses of an existing author, ordered by title.
    fn get_courses_for_author(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Course>, CoreError>> + Send;

    fn get_course_for_author(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    /// Like `get_course_for_author`, but a missing course is not an error.
    fn find_course_for_author(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    fn create_course_for_author(
        &self,
        author_id: Uuid,
        input: CreateCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    /// Update the course, or create it under `course_id` when it does not exist.
    fn upsert_course_for_author(
        &self,
        author_id: Uuid,
        course_id: Uuid,
        input: UpdateCourseInput,
    ) -> impl Future<Output = Result<UpsertOutcome, CoreError>> + Send;

    fn delete_course_for_author(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CourseRepository: Send + Sync {
    fn get_courses(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Course>, CoreError>> + Send;

    fn get_course(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    /// Whether any author owns a course with `course_id`.
    fn course_exists(&self, course_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn create_course(
        &self,
        course: Course,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn update_course(
        &self,
        course: Course,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn delete_course(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
