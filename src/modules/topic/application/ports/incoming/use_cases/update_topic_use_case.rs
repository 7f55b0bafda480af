use async_trait::async_trait;

use crate::topic::application::domain::entities::{
    Topic, TopicContent, TopicContentError, TopicId,
};

//
// ──────────────────────────────────────────────────────────
// Update Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    topic_id: TopicId,
    content: TopicContent,
}

impl UpdateTopicCommand {
    pub fn new(
        topic_id: TopicId,
        title: &str,
        description: &str,
    ) -> Result<Self, TopicContentError> {
        Ok(Self {
            topic_id,
            content: TopicContent::new(title, description)?,
        })
    }

    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    pub fn into_content(self) -> TopicContent {
        self.content
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found with id {0}")]
    TopicNotFound(TopicId),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<Topic, UpdateTopicError>;
}
