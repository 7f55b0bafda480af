use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of topic storage
#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// All stored topics, ordered by id ascending.
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn find_topic_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError>;
}
