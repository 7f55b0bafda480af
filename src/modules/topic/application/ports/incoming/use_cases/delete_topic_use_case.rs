use async_trait::async_trait;

use crate::topic::application::domain::entities::TopicId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found with id {0}")]
    TopicNotFound(TopicId),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes a topic permanently. Deleting an absent id is an error,
/// including a second delete of the same id.
#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: TopicId) -> Result<(), DeleteTopicError>;
}
