use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("No property mapping registered for <{exposed}, {storage}>")]
    MappingNotFound {
        exposed: &'static str,
        storage: &'static str,
    },

    #[error("Key mapping for {0} is missing")]
    InvalidSortField(String),

    #[error("Property {0} wasn't found")]
    UnknownField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error")]
    InternalServerError,
}
