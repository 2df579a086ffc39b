use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, query::property_mapping::PropertyMapping,
};

const DESCENDING_SUFFIX: &str = " desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// One storage-level ordering term. A list of instructions is kept in priority
/// order: the first instruction is the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortInstruction<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Comparable value extracted from a stored record for in-memory ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Null,
    Uuid(Uuid),
    /// Ordered by the case-folded text first, the raw text breaks ties.
    Text { folded: String, raw: String },
    DateTime(DateTime<Utc>),
}

impl SortValue {
    pub fn text(value: &str) -> Self {
        SortValue::Text {
            folded: value.to_lowercase(),
            raw: value.to_string(),
        }
    }
}

/// A storage type whose fields can be named by a typed selector and compared.
pub trait Sortable: 'static {
    type Field: Copy + Send + Sync + 'static;

    fn sort_value(&self, field: Self::Field) -> SortValue;
}

/// Translate an `orderBy` expression into storage sort instructions.
///
/// Clauses are comma separated, a clause ending with ` desc` sorts descending and
/// the field name is the text before the first space. Every storage field of a
/// mapping entry inherits the clause direction, flipped when the entry is marked
/// `revert`.
pub fn build_sort<F: Copy>(
    order_by: Option<&str>,
    mapping: &PropertyMapping<F>,
) -> Result<Vec<SortInstruction<F>>, CoreError> {
    let order_by = match order_by {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Ok(Vec::new()),
    };

    let mut instructions = Vec::new();

    for clause in order_by.split(',') {
        let clause = clause.trim();

        let mut direction = if clause.ends_with(DESCENDING_SUFFIX) {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        let property_name = clause_property_name(clause);

        let mapping_value = mapping
            .get(property_name)
            .ok_or_else(|| CoreError::InvalidSortField(property_name.to_string()))?;

        if mapping_value.revert {
            direction = direction.reversed();
        }

        instructions.extend(
            mapping_value
                .destination_properties
                .iter()
                .map(|field| SortInstruction {
                    field: *field,
                    direction,
                }),
        );
    }

    Ok(instructions)
}

/// Order `items` with a stable comparator chain built from `instructions`.
pub fn apply_sort<T: Sortable>(items: &mut [T], instructions: &[SortInstruction<T::Field>]) {
    if instructions.is_empty() {
        return;
    }

    items.sort_by(|left, right| compare(left, right, instructions));
}

fn compare<T: Sortable>(left: &T, right: &T, instructions: &[SortInstruction<T::Field>]) -> Ordering {
    for instruction in instructions {
        let ordering = left
            .sort_value(instruction.field)
            .cmp(&right.sort_value(instruction.field));

        let ordering = match instruction.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// Name part of an `orderBy` clause or a `fields` token: everything before the
/// first space, trimmed.
pub(crate) fn clause_property_name(clause: &str) -> &str {
    let clause = clause.trim();
    match clause.find(' ') {
        Some(index) => &clause[..index],
        None => clause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BookField {
        Title,
        Author,
        Published,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Book {
        title: &'static str,
        author: &'static str,
        published: i64,
    }

    impl Sortable for Book {
        type Field = BookField;

        fn sort_value(&self, field: BookField) -> SortValue {
            match field {
                BookField::Title => SortValue::text(self.title),
                BookField::Author => SortValue::text(self.author),
                BookField::Published => SortValue::DateTime(
                    DateTime::from_timestamp(self.published, 0).unwrap_or_default(),
                ),
            }
        }
    }

    fn book_mapping() -> PropertyMapping<BookField> {
        PropertyMapping::new()
            .with("title", vec![BookField::Title], false)
            .with("age", vec![BookField::Published], true)
            .with("byline", vec![BookField::Author, BookField::Title], false)
    }

    fn books() -> Vec<Book> {
        vec![
            Book {
                title: "Dune",
                author: "Herbert",
                published: 300,
            },
            Book {
                title: "Anathem",
                author: "Stephenson",
                published: 100,
            },
            Book {
                title: "Cryptonomicon",
                author: "Stephenson",
                published: 200,
            },
        ]
    }

    fn titles(books: &[Book]) -> Vec<&'static str> {
        books.iter().map(|b| b.title).collect()
    }

    #[test]
    fn test_empty_order_by_yields_no_instructions() {
        let mapping = book_mapping();
        assert!(build_sort(None, &mapping).unwrap().is_empty());
        assert!(build_sort(Some("   "), &mapping).unwrap().is_empty());
    }

    #[test]
    fn test_reverted_mapping_flips_direction() {
        let mapping = book_mapping();
        let instructions = build_sort(Some("Age desc"), &mapping).unwrap();
        assert_eq!(
            instructions,
            vec![SortInstruction {
                field: BookField::Published,
                direction: SortDirection::Asc,
            }]
        );

        let instructions = build_sort(Some("age"), &mapping).unwrap();
        assert_eq!(instructions[0].direction, SortDirection::Desc);
    }

    #[test]
    fn test_multi_field_entry_keeps_listed_order_and_direction() {
        let mapping = book_mapping();
        let instructions = build_sort(Some("byline desc"), &mapping).unwrap();
        assert_eq!(
            instructions,
            vec![
                SortInstruction {
                    field: BookField::Author,
                    direction: SortDirection::Desc,
                },
                SortInstruction {
                    field: BookField::Title,
                    direction: SortDirection::Desc,
                },
            ]
        );
    }

    #[test]
    fn test_first_clause_is_primary_key() {
        let mapping = book_mapping();
        let instructions = build_sort(Some(" title , age desc"), &mapping).unwrap();
        assert_eq!(instructions[0].field, BookField::Title);
        assert_eq!(instructions[1].field, BookField::Published);
    }

    #[test]
    fn test_desc_suffix_is_case_sensitive() {
        let mapping = book_mapping();
        let instructions = build_sort(Some("title DESC"), &mapping).unwrap();
        assert_eq!(instructions[0].direction, SortDirection::Asc);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mapping = book_mapping();
        let err = build_sort(Some("title, isbn desc"), &mapping).unwrap_err();
        assert_eq!(err, CoreError::InvalidSortField("isbn".to_string()));
    }

    #[test]
    fn test_apply_sort_uses_comparator_chain() {
        let mapping = book_mapping();
        let mut items = books();

        let instructions = build_sort(Some("byline"), &mapping).unwrap();
        apply_sort(&mut items, &instructions);
        assert_eq!(titles(&items), vec!["Dune", "Anathem", "Cryptonomicon"]);

        let instructions = build_sort(Some("age"), &mapping).unwrap();
        apply_sort(&mut items, &instructions);
        assert_eq!(titles(&items), vec!["Dune", "Cryptonomicon", "Anathem"]);
    }

    #[test]
    fn test_apply_sort_twice_is_idempotent() {
        let mapping = book_mapping();
        let instructions = build_sort(Some("byline desc, age"), &mapping).unwrap();

        let mut once = books();
        apply_sort(&mut once, &instructions);

        let mut twice = once.clone();
        apply_sort(&mut twice, &instructions);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_instructions_keeps_input_order() {
        let mut items = books();
        apply_sort(&mut items, &[]);
        assert_eq!(titles(&items), vec!["Dune", "Anathem", "Cryptonomicon"]);
    }

    #[test]
    fn test_text_ignores_case_before_breaking_ties() {
        let mapping = book_mapping();
        let mut items = vec![
            Book {
                title: "zebra",
                author: "x",
                published: 1,
            },
            Book {
                title: "Apple",
                author: "x",
                published: 2,
            },
            Book {
                title: "banana",
                author: "x",
                published: 3,
            },
            Book {
                title: "apple",
                author: "x",
                published: 4,
            },
        ];

        let instructions = build_sort(Some("title"), &mapping).unwrap();
        apply_sort(&mut items, &instructions);

        assert_eq!(titles(&items), vec!["Apple", "apple", "banana", "zebra"]);
    }
}
