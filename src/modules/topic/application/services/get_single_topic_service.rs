use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::incoming::use_cases::{GetSingleTopicError, GetSingleTopicUseCase},
    ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleTopicUseCase for GetSingleTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: TopicId) -> Result<Topic, GetSingleTopicError> {
        self.query
            .find_topic_by_id(topic_id)
            .await
            .map_err(|e| GetSingleTopicError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleTopicError::TopicNotFound(topic_id))
    }
}
