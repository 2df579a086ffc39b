use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    author::{
        entities::Author,
        ports::{AuthorRepository, AuthorService},
        value_objects::{
            AuthorsFilter, CreateAuthorInput, GetAuthorCollectionInput, GetAuthorsInput,
        },
        views::AuthorView,
    },
    common::{entities::app_errors::CoreError, services::Service},
    course::ports::CourseRepository,
    health::ports::HealthCheckRepository,
    query::{paging::PagedList, sort::build_sort},
};

impl<A, C, H> AuthorService for Service<A, C, H>
where
    A: AuthorRepository,
    C: CourseRepository,
    H: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_authors(&self, input: GetAuthorsInput) -> Result<PagedList<Author>, CoreError> {
        let mapping = self
            .property_mappings
            .get_property_mapping::<AuthorView, Author>()?;
        let sort = build_sort(input.order_by.as_deref(), mapping)?;

        self.author_repository
            .get_authors(AuthorsFilter {
                main_category: input.main_category,
                search_query: input.search_query,
                sort,
                page: input.page,
            })
            .await
    }

    #[instrument(skip(self))]
    async fn get_author(&self, author_id: Uuid) -> Result<Author, CoreError> {
        self.author_repository
            .get_author(author_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_author_collection(
        &self,
        input: GetAuthorCollectionInput,
    ) -> Result<Vec<Author>, CoreError> {
        let mut ids: Vec<Uuid> = Vec::with_capacity(input.ids.len());
        for id in input.ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        if ids.is_empty() {
            return Err(CoreError::InvalidInput(
                "at least one author id is required".to_string(),
            ));
        }

        let requested = ids.len();
        let authors = self.author_repository.get_authors_by_ids(ids).await?;

        if authors.len() != requested {
            return Err(CoreError::NotFound);
        }

        Ok(authors)
    }

    #[instrument(skip(self))]
    async fn create_author(&self, input: CreateAuthorInput) -> Result<Author, CoreError> {
        let (author, courses) = Author::new(input);

        self.author_repository.create_author(author, courses).await
    }

    #[instrument(skip(self))]
    async fn create_author_collection(
        &self,
        inputs: Vec<CreateAuthorInput>,
    ) -> Result<Vec<Author>, CoreError> {
        if inputs.is_empty() {
            return Err(CoreError::InvalidInput(
                "at least one author is required".to_string(),
            ));
        }

        let authors = inputs.into_iter().map(Author::new).collect();

        self.author_repository.create_authors(authors).await
    }

    #[instrument(skip(self))]
    async fn delete_author(&self, author_id: Uuid) -> Result<(), CoreError> {
        if !self.author_repository.author_exists(author_id).await? {
            return Err(CoreError::NotFound);
        }

        self.author_repository.delete_author(author_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{
        course::{ports::CourseRepository, value_objects::CreateCourseInput},
        query::{paging::PageRequest, property_mapping::PropertyMappingService},
    };
    use crate::infrastructure::in_memory::{
        InMemoryAuthorRepository, InMemoryCourseRepository, InMemoryDatabase,
        InMemoryHealthCheckRepository,
    };

    type TestService =
        Service<InMemoryAuthorRepository, InMemoryCourseRepository, InMemoryHealthCheckRepository>;

    fn service() -> (TestService, InMemoryDatabase) {
        let database = InMemoryDatabase::new();
        let service = Service::new(
            InMemoryAuthorRepository::new(database.clone()),
            InMemoryCourseRepository::new(database.clone()),
            InMemoryHealthCheckRepository,
            Arc::new(PropertyMappingService::with_defaults()),
        );
        (service, database)
    }

    fn author_input(first: &str, last: &str, year: i32, category: &str) -> CreateAuthorInput {
        CreateAuthorInput {
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
            date_of_death: None,
            main_category: category.to_string(),
            courses: Vec::new(),
        }
    }

    async fn seed(service: &TestService) -> Vec<Author> {
        let mut authors = Vec::new();
        for input in [
            author_input("Berry", "Griffin Beak Eldritch", 1650, "Ships"),
            author_input("Nancy", "Swashbuckler Rye", 1668, "Rum"),
            author_input("Eli", "Ivory Bones Sweet", 1701, "Singing"),
            author_input("Arnold", "The Unseen Stafford", 1702, "Singing"),
        ] {
            authors.push(service.create_author(input).await.unwrap());
        }
        authors
    }

    #[tokio::test]
    async fn test_create_author_assigns_ids_to_nested_courses() {
        let (service, database) = service();
        let mut input = author_input("Seabury", "Toxic Reyson", 1690, "Maps");
        input.courses = vec![
            CreateCourseInput {
                title: "Avoiding Brawls While Drinking as Much Rum as You Desire".to_string(),
                description: None,
            },
            CreateCourseInput {
                title: "Singalong Pirate Hits".to_string(),
                description: Some("Three-part harmonies".to_string()),
            },
        ];

        let author = service.create_author(input).await.unwrap();
        let courses = InMemoryCourseRepository::new(database)
            .get_courses(author.id)
            .await
            .unwrap();

        assert!(!author.id.is_nil());
        assert_eq!(courses.len(), 2);
        assert_ne!(courses[0].id, courses[1].id);
        assert!(courses.iter().all(|c| !c.id.is_nil()));
    }

    #[tokio::test]
    async fn test_get_authors_sorts_through_property_mapping() {
        let (service, _) = service();
        seed(&service).await;

        let page = service
            .get_authors(GetAuthorsInput {
                order_by: Some("mainCategory, age desc".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let names: Vec<&str> = page.items.iter().map(|a| a.first_name.as_str()).collect();
        // Oldest first within a category: age desc is date of birth ascending.
        assert_eq!(names, vec!["Nancy", "Berry", "Eli", "Arnold"]);
    }

    #[tokio::test]
    async fn test_get_authors_rejects_unmapped_sort_field() {
        let (service, _) = service();

        let err = service
            .get_authors(GetAuthorsInput {
                order_by: Some("dateOfBirth".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidSortField("dateOfBirth".to_string()));
    }

    #[tokio::test]
    async fn test_get_authors_filters_and_pages() {
        let (service, _) = service();
        seed(&service).await;

        let page = service
            .get_authors(GetAuthorsInput {
                main_category: Some(" Singing ".to_string()),
                page: PageRequest::new(Some(1), Some(1), 20),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total_count, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert!(page.has_next());

        let page = service
            .get_authors(GetAuthorsInput {
                search_query: Some(" Rum ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].first_name, "Nancy");
    }

    #[tokio::test]
    async fn test_author_collection_requires_every_id() {
        let (service, _) = service();
        let authors = seed(&service).await;

        let found = service
            .get_author_collection(GetAuthorCollectionInput {
                ids: vec![authors[0].id, authors[2].id, authors[0].id],
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 2);

        let err = service
            .get_author_collection(GetAuthorCollectionInput {
                ids: vec![authors[0].id, Uuid::new_v4()],
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);

        let err = service
            .get_author_collection(GetAuthorCollectionInput { ids: Vec::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_delete_author_removes_courses() {
        let (service, database) = service();
        let mut input = author_input("Berry", "Griffin Beak Eldritch", 1650, "Ships");
        input.courses = vec![CreateCourseInput {
            title: "Commandeering a Ship Without Getting Caught".to_string(),
            description: None,
        }];
        let author = service.create_author(input).await.unwrap();

        service.delete_author(author.id).await.unwrap();

        assert_eq!(service.get_author(author.id).await, Err(CoreError::NotFound));
        let courses = InMemoryCourseRepository::new(database)
            .get_courses(author.id)
            .await
            .unwrap();
        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_author_is_not_found() {
        let (service, _) = service();
        assert_eq!(
            service.delete_author(Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        );
    }
}
