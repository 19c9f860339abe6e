// Flat record models served to the dashboard
use serde::Serialize;

/// One row of the users table. Every field is a plain string; absent or
/// mismatched source properties become empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub number: String,
    pub role: String,
}

/// One row of the services table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub status: String,
    pub category: String,
}

impl User {
    /// Placeholder row for a page that could not be read. Keeps the batch
    /// whole and the original order intact.
    pub fn load_error(id: String) -> Self {
        Self {
            id,
            name: "error loading".to_string(),
            email: String::new(),
            number: String::new(),
            role: String::new(),
        }
    }
}

impl Service {
    pub fn load_error(id: String) -> Self {
        Self {
            id,
            name: "error loading".to_string(),
            description: String::new(),
            price: String::new(),
            status: String::new(),
            category: String::new(),
        }
    }
}
