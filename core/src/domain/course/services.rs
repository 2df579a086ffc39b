use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    author::ports::AuthorRepository,
    common::{entities::app_errors::CoreError, services::Service},
    course::{
        entities::Course,
        ports::{CourseRepository, CourseService},
        value_objects::{CreateCourseInput, UpdateCourseInput, UpsertOutcome},
    },
    health::ports::HealthCheckRepository,
};

impl<A, C, H> Service<A, C, H>
where
    A: AuthorRepository,
    C: CourseRepository,
    H: HealthCheckRepository,
{
    async fn ensure_author_exists(&self, author_id: Uuid) -> Result<(), CoreError> {
        if self.author_repository.author_exists(author_id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }
}

impl<A, C, H> CourseService for Service<A, C, H>
where
    A: AuthorRepository,
    C: CourseRepository,
    H: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_courses_for_author(&self, author_id: Uuid) -> Result<Vec<Course>, CoreError> {
        self.ensure_author_exists(author_id).await?;

        self.course_repository.get_courses(author_id).await
    }

    #[instrument(skip(self))]
    async fn get_course_for_author(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> Result<Course, CoreError> {
        self.find_course_for_author(author_id, course_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn find_course_for_author(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Course>, CoreError> {
        self.ensure_author_exists(author_id).await?;

        self.course_repository.get_course(author_id, course_id).await
    }

    #[instrument(skip(self))]
    async fn create_course_for_author(
        &self,
        author_id: Uuid,
        input: CreateCourseInput,
    ) -> Result<Course, CoreError> {
        self.ensure_author_exists(author_id).await?;

        let course = Course::new(author_id, input.title, input.description);

        self.course_repository.create_course(course).await
    }

    #[instrument(skip(self))]
    async fn upsert_course_for_author(
        &self,
        author_id: Uuid,
        course_id: Uuid,
        input: UpdateCourseInput,
    ) -> Result<UpsertOutcome, CoreError> {
        self.ensure_author_exists(author_id).await?;

        match self.course_repository.get_course(author_id, course_id).await? {
            Some(mut course) => {
                course.update(input.title, input.description);
                let updated = self.course_repository.update_course(course).await?;
                Ok(UpsertOutcome::Updated(updated))
            }
            None => {
                if self.course_repository.course_exists(course_id).await? {
                    return Err(CoreError::InvalidInput(format!(
                        "course id {} is already in use",
                        course_id
                    )));
                }

                let course = Course::with_id(course_id, author_id, input.title, input.description);
                let created = self.course_repository.create_course(course).await?;
                Ok(UpsertOutcome::Created(created))
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete_course_for_author(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), CoreError> {
        self.get_course_for_author(author_id, course_id).await?;

        self.course_repository
            .delete_course(author_id, course_id)
            .await
    }
}
