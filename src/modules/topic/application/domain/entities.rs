use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Database-assigned identifier of a topic. Never supplied by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(i64);

impl TopicId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TopicId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TopicId> for i64 {
    fn from(id: TopicId) -> Self {
        id.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored forum topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Topic {
    #[schema(value_type = i64, example = 1)]
    pub id: TopicId,

    #[schema(example = "Hello")]
    pub title: String,

    #[schema(example = "World")]
    pub description: String,
}

//
// ──────────────────────────────────────────────────────────
// Validated title + description pair
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicContent {
    title: String,
    description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicContentError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Description cannot be empty")]
    EmptyDescription,
}

impl TopicContent {
    /// Rejects whitespace-only input, title first. Accepted values are kept verbatim.
    pub fn new(title: &str, description: &str) -> Result<Self, TopicContentError> {
        if title.trim().is_empty() {
            return Err(TopicContentError::EmptyTitle);
        }

        if description.trim().is_empty() {
            return Err(TopicContentError::EmptyDescription);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.description)
    }
}
