//! Hypermedia links attached to responses.

use course_library_core::domain::query::paging::{PageRequest, PagedList};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::query_params::{AuthorsResourceParameters, FieldsParameters};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkView {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl LinkView {
    pub fn new(href: impl Into<String>, rel: &str, method: &str) -> Self {
        Self {
            href: href.into(),
            rel: rel.to_string(),
            method: method.to_string(),
        }
    }
}

pub fn authors_path(root_path: &str) -> String {
    format!("{}/api/authors", root_path)
}

pub fn author_path(root_path: &str, author_id: Uuid) -> String {
    format!("{}/api/authors/{}", root_path, author_id)
}

pub fn courses_path(root_path: &str, author_id: Uuid) -> String {
    format!("{}/courses", author_path(root_path, author_id))
}

pub fn course_path(root_path: &str, author_id: Uuid, course_id: Uuid) -> String {
    format!("{}/{}", courses_path(root_path, author_id), course_id)
}

pub fn author_collection_path(root_path: &str, author_ids: &[Uuid]) -> String {
    let ids = author_ids
        .iter()
        .map(Uuid::to_string)
        .collect::<Vec<String>>()
        .join(",");

    format!("{}/api/authorcollections/({})", root_path, ids)
}

pub fn root_links(root_path: &str) -> Vec<LinkView> {
    vec![
        LinkView::new(format!("{}/api", root_path), "self", "GET"),
        LinkView::new(authors_path(root_path), "authors", "GET"),
        LinkView::new(authors_path(root_path), "create_author", "POST"),
    ]
}

/// Links of a single author. `fields` is carried over to `self` when present.
pub fn author_links(root_path: &str, author_id: Uuid, fields: Option<&str>) -> Vec<LinkView> {
    let self_href = match fields.map(str::trim).filter(|f| !f.is_empty()) {
        Some(fields) => {
            let query = serde_urlencoded::to_string(FieldsParameters {
                fields: Some(fields.to_string()),
            })
            .unwrap_or_default();
            format!("{}?{}", author_path(root_path, author_id), query)
        }
        None => author_path(root_path, author_id),
    };

    vec![
        LinkView::new(self_href, "self", "GET"),
        LinkView::new(author_path(root_path, author_id), "delete_author", "DELETE"),
        LinkView::new(
            courses_path(root_path, author_id),
            "create_course_for_author",
            "POST",
        ),
        LinkView::new(courses_path(root_path, author_id), "courses", "GET"),
    ]
}

/// `self`, and `nextPage`/`previousPage` when such pages exist.
pub fn authors_links<T>(
    root_path: &str,
    params: &AuthorsResourceParameters,
    page: &PagedList<T>,
) -> Vec<LinkView> {
    let href = |page_number: u64| {
        let query = params
            .for_page(PageRequest {
                page_number,
                page_size: page.page_size,
            })
            .to_query_string();
        format!("{}?{}", authors_path(root_path), query)
    };

    let mut links = vec![LinkView::new(href(page.current_page), "self", "GET")];

    if page.has_next() {
        links.push(LinkView::new(href(page.current_page + 1), "nextPage", "GET"));
    }

    if page.has_previous() {
        links.push(LinkView::new(
            href(page.current_page - 1),
            "previousPage",
            "GET",
        ));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_links_carry_fields_on_self_only() {
        let id = Uuid::nil();
        let links = author_links("", id, Some("id,name"));

        assert_eq!(links.len(), 4);
        assert_eq!(
            links[0].href,
            "/api/authors/00000000-0000-0000-0000-000000000000?fields=id%2Cname"
        );
        assert_eq!(links[1].rel, "delete_author");
        assert_eq!(links[1].method, "DELETE");
        assert!(!links[1].href.contains('?'));
    }

    #[test]
    fn test_authors_links_on_middle_page() {
        let page = PagedList::from_vec(
            (0..25).collect::<Vec<u32>>(),
            PageRequest {
                page_number: 2,
                page_size: 10,
            },
        );
        let params = AuthorsResourceParameters {
            main_category: Some("Rum".to_string()),
            ..Default::default()
        };

        let links = authors_links("/v1", &params, &page);
        let rels = links.iter().map(|l| l.rel.as_str()).collect::<Vec<&str>>();

        assert_eq!(rels, vec!["self", "nextPage", "previousPage"]);
        assert_eq!(
            links[1].href,
            "/v1/api/authors?mainCategory=Rum&pageNumber=3&pageSize=10"
        );
    }

    #[test]
    fn test_collection_path_lists_ids() {
        let ids = [Uuid::nil(), Uuid::max()];

        assert_eq!(
            author_collection_path("", &ids),
            "/api/authorcollections/(00000000-0000-0000-0000-000000000000,ffffffff-ffff-ffff-ffff-ffffffffffff)"
        );
    }
}
