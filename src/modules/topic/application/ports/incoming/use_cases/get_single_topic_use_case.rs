use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleTopicError {
    #[error("Topic not found with id {0}")]
    TopicNotFound(TopicId),

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: TopicId) -> Result<Topic, GetSingleTopicError>;
}
