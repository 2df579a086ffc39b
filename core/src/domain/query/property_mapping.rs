use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    sync::Arc,
};

use crate::domain::{
    author::{
        entities::{Author, AuthorField},
        views::AuthorView,
    },
    common::entities::app_errors::CoreError,
    query::sort::{Sortable, clause_property_name},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMappingValue<F> {
    pub destination_properties: Vec<F>,
    /// Sort direction must be flipped relative to the caller's request.
    pub revert: bool,
}

/// Exposed field name to storage field(s) table. Lookups ignore ASCII case.
#[derive(Debug, Clone)]
pub struct PropertyMapping<F> {
    entries: Vec<(String, PropertyMappingValue<F>)>,
}

impl<F> Default for PropertyMapping<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F> PropertyMapping<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, destination_properties: Vec<F>, revert: bool) -> Self {
        self.entries
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.entries.push((
            name.to_string(),
            PropertyMappingValue {
                destination_properties,
                revert,
            },
        ));
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyMappingValue<F>> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

/// Registry of property mappings keyed by `(exposed type, storage type)`.
#[derive(Clone, Default)]
pub struct PropertyMappingService {
    mappings: HashMap<(TypeId, TypeId), Arc<dyn Any + Send + Sync>>,
}

impl PropertyMappingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every mapping the API exposes.
    pub fn with_defaults() -> Self {
        let mut service = Self::new();
        service.register::<AuthorView, Author>(author_property_mapping());
        service
    }

    pub fn register<S, D>(&mut self, mapping: PropertyMapping<D::Field>)
    where
        S: 'static,
        D: Sortable,
    {
        self.mappings
            .insert((TypeId::of::<S>(), TypeId::of::<D>()), Arc::new(mapping));
    }

    pub fn get_property_mapping<S, D>(&self) -> Result<&PropertyMapping<D::Field>, CoreError>
    where
        S: 'static,
        D: Sortable,
    {
        self.mappings
            .get(&(TypeId::of::<S>(), TypeId::of::<D>()))
            .and_then(|mapping| mapping.downcast_ref::<PropertyMapping<D::Field>>())
            .ok_or(CoreError::MappingNotFound {
                exposed: type_name::<S>(),
                storage: type_name::<D>(),
            })
    }

    /// Whether every name of a comma separated field list or `orderBy` expression
    /// is mapped. Direction keywords are ignored; blank input is valid.
    pub fn valid_mapping_exists<S, D>(&self, fields: Option<&str>) -> Result<bool, CoreError>
    where
        S: 'static,
        D: Sortable,
    {
        let mapping = self.get_property_mapping::<S, D>()?;

        let fields = match fields {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Ok(true),
        };

        Ok(fields
            .split(',')
            .all(|field| mapping.contains(clause_property_name(field))))
    }
}

pub fn author_property_mapping() -> PropertyMapping<AuthorField> {
    PropertyMapping::new()
        .with("id", vec![AuthorField::Id], false)
        .with("mainCategory", vec![AuthorField::MainCategory], false)
        .with("age", vec![AuthorField::DateOfBirth], true)
        .with(
            "name",
            vec![AuthorField::FirstName, AuthorField::LastName],
            false,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::entities::Course;

    #[test]
    fn test_registered_mapping_is_found() {
        let service = PropertyMappingService::with_defaults();
        let mapping = service
            .get_property_mapping::<AuthorView, Author>()
            .unwrap();

        let age = mapping.get("Age").unwrap();
        assert_eq!(age.destination_properties, vec![AuthorField::DateOfBirth]);
        assert!(age.revert);

        let name = mapping.get("NAME").unwrap();
        assert_eq!(
            name.destination_properties,
            vec![AuthorField::FirstName, AuthorField::LastName]
        );
    }

    #[test]
    fn test_unregistered_pair_is_an_error() {
        let service = PropertyMappingService::new();
        let err = service
            .get_property_mapping::<AuthorView, Author>()
            .unwrap_err();
        assert!(matches!(err, CoreError::MappingNotFound { .. }));

        let service = PropertyMappingService::with_defaults();
        assert!(service.get_property_mapping::<Course, Author>().is_err());
    }

    #[test]
    fn test_valid_mapping_exists() {
        let service = PropertyMappingService::with_defaults();
        let check = |value: Option<&str>| {
            service
                .valid_mapping_exists::<AuthorView, Author>(value)
                .unwrap()
        };

        assert!(check(None));
        assert!(check(Some("")));
        assert!(check(Some("   ")));
        assert!(check(Some("name")));
        assert!(check(Some("mainCategory desc, Age")));
        assert!(check(Some(" id asc ,name desc")));
        assert!(!check(Some("dateOfBirth")));
        assert!(!check(Some("name, firstName desc")));
    }

    #[test]
    fn test_with_replaces_existing_entry() {
        let mapping = PropertyMapping::new()
            .with("age", vec![AuthorField::DateOfBirth], true)
            .with("Age", vec![AuthorField::Id], false);

        assert_eq!(mapping.names().count(), 1);
        assert!(!mapping.get("age").unwrap().revert);
    }
}
