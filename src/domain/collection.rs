// Collection domain model
use crate::error::ApiError;
use std::fmt;

/// A logical grouping of dashboard records. Each collection is backed by its
/// own remote database identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Services,
}

impl Collection {
    /// Parse the `database` request parameter. An absent parameter selects
    /// the users collection.
    pub fn parse(value: Option<&str>) -> Result<Self, ApiError> {
        match value {
            None | Some("users") => Ok(Collection::Users),
            Some("services") => Ok(Collection::Services),
            Some(other) => Err(ApiError::InvalidDatabase(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Services => "services",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
