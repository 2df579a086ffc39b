use crate::domain::{
    author::ports::AuthorRepository,
    common::{entities::app_errors::CoreError, services::Service},
    course::ports::CourseRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
};

impl<A, C, H> HealthCheckService for Service<A, C, H>
where
    A: AuthorRepository,
    C: CourseRepository,
    H: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
