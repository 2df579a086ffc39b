use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Named accessor for one exposed field of `T`.
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    pub accessor: fn(&T) -> Value,
}

/// A representation that can be projected onto a subset of its fields.
pub trait Shapeable: Sized + 'static {
    /// Every exposed field, in declaration order.
    fn field_descriptors() -> &'static [FieldDescriptor<Self>];

    fn find_field(name: &str) -> Option<&'static FieldDescriptor<Self>> {
        let name = name.trim();
        Self::field_descriptors()
            .iter()
            .find(|descriptor| descriptor.name.eq_ignore_ascii_case(name))
    }
}

/// Ordered field name to value pairs with unique keys, serialized as a JSON object
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedData {
    entries: Vec<(String, Value)>,
}

impl ShapedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`. A replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ShapedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Project `source` onto the comma separated `fields`, or onto every field when
/// `fields` is absent or blank.
pub fn shape_data<T: Shapeable>(source: &T, fields: Option<&str>) -> Result<ShapedData, CoreError> {
    let mut shaped = ShapedData::new();

    let fields = match fields {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            for descriptor in T::field_descriptors() {
                shaped.insert(descriptor.name, (descriptor.accessor)(source));
            }
            return Ok(shaped);
        }
    };

    for field in fields.split(',') {
        let descriptor =
            T::find_field(field).ok_or_else(|| CoreError::UnknownField(field.trim().to_string()))?;

        if !shaped.contains_key(descriptor.name) {
            shaped.insert(descriptor.name, (descriptor.accessor)(source));
        }
    }

    Ok(shaped)
}

pub fn shape_collection<T: Shapeable>(
    sources: &[T],
    fields: Option<&str>,
) -> Result<Vec<ShapedData>, CoreError> {
    sources
        .iter()
        .map(|source| shape_data(source, fields))
        .collect()
}

/// Whether every name in the comma separated `fields` exists on `T`.
pub fn has_fields<T: Shapeable>(fields: Option<&str>) -> bool {
    match fields {
        Some(value) if !value.trim().is_empty() => {
            value.split(',').all(|field| T::find_field(field).is_some())
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Planet {
        name: String,
        moons: u32,
        ringed: bool,
    }

    const PLANET_FIELDS: &[FieldDescriptor<Planet>] = &[
        FieldDescriptor {
            name: "name",
            accessor: |p| json!(p.name),
        },
        FieldDescriptor {
            name: "moonCount",
            accessor: |p| json!(p.moons),
        },
        FieldDescriptor {
            name: "ringed",
            accessor: |p| json!(p.ringed),
        },
    ];

    impl Shapeable for Planet {
        fn field_descriptors() -> &'static [FieldDescriptor<Self>] {
            PLANET_FIELDS
        }
    }

    fn saturn() -> Planet {
        Planet {
            name: "Saturn".to_string(),
            moons: 146,
            ringed: true,
        }
    }

    #[test]
    fn test_no_fields_returns_every_field_once() {
        let shaped = shape_data(&saturn(), None).unwrap();
        assert_eq!(
            shaped.keys().collect::<Vec<_>>(),
            vec!["name", "moonCount", "ringed"]
        );

        let blank = shape_data(&saturn(), Some("  ")).unwrap();
        assert_eq!(blank, shaped);
    }

    #[test]
    fn test_requested_fields_keep_request_order_and_canonical_names() {
        let shaped = shape_data(&saturn(), Some(" RINGED, mooncount ")).unwrap();
        assert_eq!(shaped.keys().collect::<Vec<_>>(), vec!["ringed", "moonCount"]);
        assert_eq!(shaped.get("moonCount"), Some(&json!(146)));
    }

    #[test]
    fn test_duplicate_field_is_emitted_once() {
        let shaped = shape_data(&saturn(), Some("name,Name")).unwrap();
        assert_eq!(shaped.len(), 1);
    }

    #[test]
    fn test_unknown_field_fails() {
        let err = shape_data(&saturn(), Some("name,mass")).unwrap_err();
        assert_eq!(err, CoreError::UnknownField("mass".to_string()));
        assert!(shape_data(&saturn(), Some("name,,ringed")).is_err());
    }

    #[test]
    fn test_has_fields() {
        assert!(has_fields::<Planet>(None));
        assert!(has_fields::<Planet>(Some("")));
        assert!(has_fields::<Planet>(Some("NAME, ringed")));
        assert!(!has_fields::<Planet>(Some("name, mass")));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let shaped = shape_data(&saturn(), Some("ringed,name")).unwrap();
        let text = serde_json::to_string(&shaped).unwrap();
        assert_eq!(text, r#"{"ringed":true,"name":"Saturn"}"#);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut shaped = shape_data(&saturn(), Some("name,ringed")).unwrap();
        shaped.insert("name", json!("Cronus"));
        shaped.insert("links", json!([]));
        assert_eq!(
            shaped.keys().collect::<Vec<_>>(),
            vec!["name", "ringed", "links"]
        );
        assert_eq!(shaped.get("name"), Some(&json!("Cronus")));
    }

    fn shape_all<T: Shapeable>(items: &[T], fields: &str) -> Option<Vec<ShapedData>> {
        if !has_fields::<T>(Some(fields)) {
            return None;
        }
        shape_collection(items, Some(fields)).ok()
    }

    #[test]
    fn test_shaping_through_a_generic_caller() {
        let shaped = shape_all(&[saturn()], "name").unwrap();
        assert_eq!(shaped[0].get("name"), Some(&json!("Saturn")));
        assert!(shape_all(&[saturn()], "mass").is_none());
    }
}
