use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicContent, TopicContentError};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    content: TopicContent,
}

impl CreateTopicCommand {
    pub fn new(title: &str, description: &str) -> Result<Self, TopicContentError> {
        Ok(Self {
            content: TopicContent::new(title, description)?,
        })
    }

    pub fn content(&self) -> &TopicContent {
        &self.content
    }

    pub fn into_content(self) -> TopicContent {
        self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}
