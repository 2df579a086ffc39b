use crate::application::http::{
    author::router::AuthorApiDoc, author_collection::router::AuthorCollectionApiDoc,
    course::router::CourseApiDoc, health::HealthApiDoc, root::RootApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Library API"
    ),
    nest(
        (path = "/api", api = RootApiDoc),
        (path = "/api/authors", api = AuthorApiDoc),
        (path = "/api/authorcollections", api = AuthorCollectionApiDoc),
        (path = "/api/authors/{author_id}/courses", api = CourseApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_resource_paths() {
        let openapi = ApiDoc::openapi();
        let paths = openapi.paths.paths;

        assert!(paths.contains_key("/api/authors"));
        assert!(paths.contains_key("/api/authors/{author_id}"));
        assert!(paths.contains_key("/api/authors/{author_id}/courses/{course_id}"));
        assert!(paths.contains_key("/api/authorcollections/{ids}"));
        assert!(paths.contains_key("/health/live"));
    }
}
