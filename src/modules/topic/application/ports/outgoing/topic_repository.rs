use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicContent, TopicId};

// Input DTO for creating or overwriting a topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicData {
    pub title: String,
    pub description: String,
}

impl From<TopicContent> for TopicData {
    fn from(content: TopicContent) -> Self {
        let (title, description) = content.into_parts();
        Self { title, description }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

/// Write side of topic storage
#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: TopicData) -> Result<Topic, TopicRepositoryError>;

    async fn update_topic(
        &self,
        topic_id: TopicId,
        data: TopicData,
    ) -> Result<Topic, TopicRepositoryError>;

    async fn delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError>;
}
