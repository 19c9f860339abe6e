// Notion page wire model
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// One record returned by a database query. Owned and versioned entirely by
/// the remote service; never mutated here.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[allow(dead_code)]
    pub created_time: DateTime<Utc>,
    #[allow(dead_code)]
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// A property value tagged by its `type` discriminator. Tags this service
/// does not use (formula, relation, ...) fall into `Unsupported` so a page
/// always deserializes regardless of its schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichTextFragment>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichTextFragment>,
    },
    Email {
        email: Option<String>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    Number {
        number: Option<f64>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    Date {
        #[allow(dead_code)]
        date: Option<DateRange>,
    },
    Checkbox {
        #[serde(default)]
        #[allow(dead_code)]
        checkbox: bool,
    },
    Url {
        #[allow(dead_code)]
        url: Option<String>,
    },
    People {
        #[serde(default)]
        #[allow(dead_code)]
        people: Vec<PersonRef>,
    },
    #[serde(other)]
    Unsupported,
}

/// One span of rich text; only the rendered plain text matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct RichTextFragment {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateRange {
    #[allow(dead_code)]
    pub start: Option<String>,
    #[allow(dead_code)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonRef {
    #[allow(dead_code)]
    pub id: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub name: Option<String>,
}

impl PropertyValue {
    /// Plain text of the first title fragment.
    pub fn title_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Title { title } => title.first().map(|t| t.plain_text.as_str()),
            _ => None,
        }
    }

    /// Plain text of the first rich-text fragment.
    pub fn rich_text(&self) -> Option<&str> {
        match self {
            PropertyValue::RichText { rich_text } => {
                rich_text.first().map(|t| t.plain_text.as_str())
            }
            _ => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            PropertyValue::Email { email } => email.as_deref(),
            _ => None,
        }
    }

    pub fn phone_number(&self) -> Option<&str> {
        match self {
            PropertyValue::PhoneNumber { phone_number } => phone_number.as_deref(),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number { number } => *number,
            _ => None,
        }
    }

    pub fn select_name(&self) -> Option<&str> {
        match self {
            PropertyValue::Select { select } => select.as_ref().map(|s| s.name.as_str()),
            _ => None,
        }
    }

    /// Name of the first multi-select entry.
    pub fn multi_select_first(&self) -> Option<&str> {
        match self {
            PropertyValue::MultiSelect { multi_select } => {
                multi_select.first().map(|s| s.name.as_str())
            }
            _ => None,
        }
    }
}
