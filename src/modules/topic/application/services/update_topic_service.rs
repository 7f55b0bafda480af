use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::Topic,
    ports::incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    ports::outgoing::{TopicData, TopicQuery, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateTopicUseCase for UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<Topic, UpdateTopicError> {
        let topic_id = command.topic_id();

        // 1️⃣ Ensure the topic exists
        let existing = self
            .query
            .find_topic_by_id(topic_id)
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?;

        if existing.is_none() {
            return Err(UpdateTopicError::TopicNotFound(topic_id));
        }

        // 2️⃣ Overwrite title and description; the id never changes
        self.repository
            .update_topic(topic_id, TopicData::from(command.into_content()))
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound(topic_id),
                TopicRepositoryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
            })
    }
}
