//! Repository adapters over the backend selected at startup.

use uuid::Uuid;

use crate::{
    domain::{
        author::{entities::Author, ports::AuthorRepository, value_objects::AuthorsFilter},
        common::entities::app_errors::CoreError,
        course::{entities::Course, ports::CourseRepository},
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
        query::paging::PagedList,
    },
    infrastructure::{
        author::PostgresAuthorRepository,
        course::PostgresCourseRepository,
        health::PostgresHealthCheckRepository,
        in_memory::{InMemoryAuthorRepository, InMemoryCourseRepository, InMemoryHealthCheckRepository},
    },
};

macro_rules! dispatch {
    ($self:ident, $repository:ident => $call:expr) => {
        match $self {
            Self::Postgres($repository) => $call.await,
            Self::InMemory($repository) => $call.await,
        }
    };
}

#[derive(Debug, Clone)]
pub enum AuthorRepositoryAdapter {
    Postgres(PostgresAuthorRepository),
    InMemory(InMemoryAuthorRepository),
}

impl AuthorRepository for AuthorRepositoryAdapter {
    async fn get_authors(&self, filter: AuthorsFilter) -> Result<PagedList<Author>, CoreError> {
        dispatch!(self, repository => repository.get_authors(filter))
    }

    async fn get_authors_by_ids(&self, author_ids: Vec<Uuid>) -> Result<Vec<Author>, CoreError> {
        dispatch!(self, repository => repository.get_authors_by_ids(author_ids))
    }

    async fn get_author(&self, author_id: Uuid) -> Result<Option<Author>, CoreError> {
        dispatch!(self, repository => repository.get_author(author_id))
    }

    async fn author_exists(&self, author_id: Uuid) -> Result<bool, CoreError> {
        dispatch!(self, repository => repository.author_exists(author_id))
    }

    async fn create_author(&self, author: Author, courses: Vec<Course>) -> Result<Author, CoreError> {
        dispatch!(self, repository => repository.create_author(author, courses))
    }

    async fn create_authors(
        &self,
        authors: Vec<(Author, Vec<Course>)>,
    ) -> Result<Vec<Author>, CoreError> {
        dispatch!(self, repository => repository.create_authors(authors))
    }

    async fn delete_author(&self, author_id: Uuid) -> Result<(), CoreError> {
        dispatch!(self, repository => repository.delete_author(author_id))
    }
}

#[derive(Debug, Clone)]
pub enum CourseRepositoryAdapter {
    Postgres(PostgresCourseRepository),
    InMemory(InMemoryCourseRepository),
}

impl CourseRepository for CourseRepositoryAdapter {
    async fn get_courses(&self, author_id: Uuid) -> Result<Vec<Course>, CoreError> {
        dispatch!(self, repository => repository.get_courses(author_id))
    }

    async fn get_course(&self, author_id: Uuid, course_id: Uuid) -> Result<Option<Course>, CoreError> {
        dispatch!(self, repository => repository.get_course(author_id, course_id))
    }

    async fn course_exists(&self, course_id: Uuid) -> Result<bool, CoreError> {
        dispatch!(self, repository => repository.course_exists(course_id))
    }

    async fn create_course(&self, course: Course) -> Result<Course, CoreError> {
        dispatch!(self, repository => repository.create_course(course))
    }

    async fn update_course(&self, course: Course) -> Result<Course, CoreError> {
        dispatch!(self, repository => repository.update_course(course))
    }

    async fn delete_course(&self, author_id: Uuid, course_id: Uuid) -> Result<(), CoreError> {
        dispatch!(self, repository => repository.delete_course(author_id, course_id))
    }
}

#[derive(Debug, Clone)]
pub enum HealthCheckRepositoryAdapter {
    Postgres(PostgresHealthCheckRepository),
    InMemory(InMemoryHealthCheckRepository),
}

impl HealthCheckRepository for HealthCheckRepositoryAdapter {
    async fn health(&self) -> Result<u64, CoreError> {
        dispatch!(self, repository => repository.health())
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        dispatch!(self, repository => repository.readness())
    }
}
