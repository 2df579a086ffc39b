//! Process-local storage used for tests and for running without PostgreSQL.
//!
//! Author and course tables share one lock; multi-row writes happen under a single
//! write guard.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::error;
use uuid::Uuid;

use crate::domain::{
    author::{entities::Author, ports::AuthorRepository, value_objects::AuthorsFilter},
    common::entities::app_errors::CoreError,
    course::{entities::Course, ports::CourseRepository},
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    query::{paging::PagedList, sort::apply_sort},
};

#[derive(Debug, Default)]
struct Tables {
    authors: Vec<Author>,
    courses: Vec<Course>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, CoreError> {
        self.tables.read().map_err(|e| {
            error!("In-memory store lock poisoned: {}", e);
            CoreError::InternalServerError
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, CoreError> {
        self.tables.write().map_err(|e| {
            error!("In-memory store lock poisoned: {}", e);
            CoreError::InternalServerError
        })
    }
}

fn matches_filter(author: &Author, filter: &AuthorsFilter) -> bool {
    if let Some(main_category) = filter.main_category()
        && author.main_category != main_category
    {
        return false;
    }

    match filter.search_query() {
        Some(search_query) => {
            author.main_category.contains(search_query)
                || author.first_name.contains(search_query)
                || author.last_name.contains(search_query)
        }
        None => true,
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryAuthorRepository {
    database: InMemoryDatabase,
}

impl InMemoryAuthorRepository {
    pub fn new(database: InMemoryDatabase) -> Self {
        Self { database }
    }
}

impl AuthorRepository for InMemoryAuthorRepository {
    async fn get_authors(&self, filter: AuthorsFilter) -> Result<PagedList<Author>, CoreError> {
        let mut authors = self
            .database
            .read()?
            .authors
            .iter()
            .filter(|author| matches_filter(author, &filter))
            .cloned()
            .collect::<Vec<Author>>();

        apply_sort(&mut authors, &filter.sort);

        Ok(PagedList::from_vec(authors, filter.page))
    }

    async fn get_authors_by_ids(&self, author_ids: Vec<Uuid>) -> Result<Vec<Author>, CoreError> {
        let mut authors = self
            .database
            .read()?
            .authors
            .iter()
            .filter(|author| author_ids.contains(&author.id))
            .cloned()
            .collect::<Vec<Author>>();

        authors.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });

        Ok(authors)
    }

    async fn get_author(&self, author_id: Uuid) -> Result<Option<Author>, CoreError> {
        let tables = self.database.read()?;
        Ok(tables.authors.iter().find(|a| a.id == author_id).cloned())
    }

    async fn author_exists(&self, author_id: Uuid) -> Result<bool, CoreError> {
        let tables = self.database.read()?;
        Ok(tables.authors.iter().any(|a| a.id == author_id))
    }

    async fn create_author(&self, author: Author, courses: Vec<Course>) -> Result<Author, CoreError> {
        let mut tables = self.database.write()?;
        tables.authors.push(author.clone());
        tables.courses.extend(courses);

        Ok(author)
    }

    async fn create_authors(
        &self,
        authors: Vec<(Author, Vec<Course>)>,
    ) -> Result<Vec<Author>, CoreError> {
        let mut tables = self.database.write()?;
        let mut created = Vec::with_capacity(authors.len());

        for (author, courses) in authors {
            tables.authors.push(author.clone());
            tables.courses.extend(courses);
            created.push(author);
        }

        Ok(created)
    }

    async fn delete_author(&self, author_id: Uuid) -> Result<(), CoreError> {
        let mut tables = self.database.write()?;
        tables.courses.retain(|c| c.author_id != author_id);
        tables.authors.retain(|a| a.id != author_id);

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryCourseRepository {
    database: InMemoryDatabase,
}

impl InMemoryCourseRepository {
    pub fn new(database: InMemoryDatabase) -> Self {
        Self { database }
    }
}

impl CourseRepository for InMemoryCourseRepository {
    async fn get_courses(&self, author_id: Uuid) -> Result<Vec<Course>, CoreError> {
        let mut courses = self
            .database
            .read()?
            .courses
            .iter()
            .filter(|c| c.author_id == author_id)
            .cloned()
            .collect::<Vec<Course>>();

        courses.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(courses)
    }

    async fn get_course(&self, author_id: Uuid, course_id: Uuid) -> Result<Option<Course>, CoreError> {
        let tables = self.database.read()?;
        Ok(tables
            .courses
            .iter()
            .find(|c| c.id == course_id && c.author_id == author_id)
            .cloned())
    }

    async fn course_exists(&self, course_id: Uuid) -> Result<bool, CoreError> {
        let tables = self.database.read()?;
        Ok(tables.courses.iter().any(|c| c.id == course_id))
    }

    async fn create_course(&self, course: Course) -> Result<Course, CoreError> {
        let mut tables = self.database.write()?;
        if tables.courses.iter().any(|c| c.id == course.id) {
            error!("Failed to create course: duplicate id {}", course.id);
            return Err(CoreError::InternalServerError);
        }
        tables.courses.push(course.clone());

        Ok(course)
    }

    async fn update_course(&self, course: Course) -> Result<Course, CoreError> {
        let mut tables = self.database.write()?;
        let stored = tables
            .courses
            .iter_mut()
            .find(|c| c.id == course.id && c.author_id == course.author_id)
            .ok_or(CoreError::NotFound)?;

        *stored = course.clone();

        Ok(course)
    }

    async fn delete_course(&self, author_id: Uuid, course_id: Uuid) -> Result<(), CoreError> {
        let mut tables = self.database.write()?;
        tables
            .courses
            .retain(|c| !(c.id == course_id && c.author_id == author_id));

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryHealthCheckRepository;

impl HealthCheckRepository for InMemoryHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            database: "in-memory".to_string(),
        })
    }
}
