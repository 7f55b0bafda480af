use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::TopicId,
    ports::incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    ports::outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteTopicUseCase for DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: TopicId) -> Result<(), DeleteTopicError> {
        // 1️⃣ Ensure the topic exists
        let existing = self
            .query
            .find_topic_by_id(topic_id)
            .await
            .map_err(|e| DeleteTopicError::RepositoryError(e.to_string()))?;

        if existing.is_none() {
            return Err(DeleteTopicError::TopicNotFound(topic_id));
        }

        // 2️⃣ Hard delete
        self.repository
            .delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound(topic_id),
                TopicRepositoryError::DatabaseError(msg) => DeleteTopicError::RepositoryError(msg),
            })
    }
}
