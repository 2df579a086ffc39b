use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    author::{
        entities::Author,
        value_objects::{AuthorsFilter, CreateAuthorInput, GetAuthorCollectionInput, GetAuthorsInput},
    },
    common::entities::app_errors::CoreError,
    course::entities::Course,
    query::paging::PagedList,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthorService: Send + Sync {
    fn get_authors(
        &self,
        input: GetAuthorsInput,
    ) -> impl Future<Output = Result<PagedList<Author>, CoreError>> + Send;

    fn get_author(&self, author_id: Uuid) -> impl Future<Output = Result<Author, CoreError>> + Send;

    /// Every requested author, or `NotFound` when any id does not resolve.
    fn get_author_collection(
        &self,
        input: GetAuthorCollectionInput,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn create_author(
        &self,
        input: CreateAuthorInput,
    ) -> impl Future<Output = Result<Author, CoreError>> + Send;

    fn create_author_collection(
        &self,
        inputs: Vec<CreateAuthorInput>,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn delete_author(&self, author_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthorRepository: Send + Sync {
    fn get_authors(
        &self,
        filter: AuthorsFilter,
    ) -> impl Future<Output = Result<PagedList<Author>, CoreError>> + Send;

    /// Authors ordered by last name, then first name.
    fn get_authors_by_ids(
        &self,
        author_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn get_author(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Option<Author>, CoreError>> + Send;

    fn author_exists(&self, author_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Persist an author together with its courses in one transaction.
    fn create_author(
        &self,
        author: Author,
        courses: Vec<Course>,
    ) -> impl Future<Output = Result<Author, CoreError>> + Send;

    fn create_authors(
        &self,
        authors: Vec<(Author, Vec<Course>)>,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    /// Delete an author and every course it owns.
    fn delete_author(&self, author_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
