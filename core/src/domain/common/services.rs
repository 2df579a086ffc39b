use std::sync::Arc;

use crate::domain::{
    author::ports::AuthorRepository, course::ports::CourseRepository,
    health::ports::HealthCheckRepository, query::property_mapping::PropertyMappingService,
};

/// Application service. Every collaborator is handed in at construction.
#[derive(Clone)]
pub struct Service<A, C, H>
where
    A: AuthorRepository,
    C: CourseRepository,
    H: HealthCheckRepository,
{
    pub(crate) author_repository: A,
    pub(crate) course_repository: C,
    pub(crate) health_check_repository: H,
    pub(crate) property_mappings: Arc<PropertyMappingService>,
}

impl<A, C, H> Service<A, C, H>
where
    A: AuthorRepository,
    C: CourseRepository,
    H: HealthCheckRepository,
{
    pub fn new(
        author_repository: A,
        course_repository: C,
        health_check_repository: H,
        property_mappings: Arc<PropertyMappingService>,
    ) -> Self {
        Self {
            author_repository,
            course_repository,
            health_check_repository,
            property_mappings,
        }
    }

    pub fn property_mappings(&self) -> &PropertyMappingService {
        &self.property_mappings
    }
}
