use std::sync::Arc;

use tracing::{error, info};

use crate::{
    domain::{
        common::{CourseLibraryConfig, StorageBackend, services::Service},
        query::property_mapping::PropertyMappingService,
    },
    infrastructure::{
        author::PostgresAuthorRepository,
        course::PostgresCourseRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        in_memory::{
            InMemoryAuthorRepository, InMemoryCourseRepository, InMemoryDatabase,
            InMemoryHealthCheckRepository,
        },
        repositories::{
            AuthorRepositoryAdapter, CourseRepositoryAdapter, HealthCheckRepositoryAdapter,
        },
    },
};

pub type CourseLibraryService =
    Service<AuthorRepositoryAdapter, CourseRepositoryAdapter, HealthCheckRepositoryAdapter>;

pub async fn create_service(config: CourseLibraryConfig) -> Result<CourseLibraryService, anyhow::Error> {
    let property_mappings = Arc::new(PropertyMappingService::with_defaults());

    match config.storage {
        StorageBackend::Postgres => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: config.database.url(),
            })
            .await?;

            if let Err(e) = postgres.migrate(config.reset_database).await {
                error!("An error occurred while migrating the database: {}", e);
            }

            info!("Using PostgreSQL storage");

            Ok(Service::new(
                AuthorRepositoryAdapter::Postgres(PostgresAuthorRepository::new(postgres.get_db())),
                CourseRepositoryAdapter::Postgres(PostgresCourseRepository::new(postgres.get_db())),
                HealthCheckRepositoryAdapter::Postgres(PostgresHealthCheckRepository::new(
                    postgres.get_db(),
                )),
                property_mappings,
            ))
        }
        StorageBackend::InMemory => {
            info!("Using in-memory storage");
            Ok(in_memory_service(InMemoryDatabase::new(), property_mappings))
        }
    }
}

/// Service over process-local storage; `database` stays shared with the caller.
pub fn in_memory_service(
    database: InMemoryDatabase,
    property_mappings: Arc<PropertyMappingService>,
) -> CourseLibraryService {
    Service::new(
        AuthorRepositoryAdapter::InMemory(InMemoryAuthorRepository::new(database.clone())),
        CourseRepositoryAdapter::InMemory(InMemoryCourseRepository::new(database)),
        HealthCheckRepositoryAdapter::InMemory(InMemoryHealthCheckRepository),
        property_mappings,
    )
}
