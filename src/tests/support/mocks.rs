use async_trait::async_trait;
use mockall::mock;

use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::outgoing::{
        TopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
    },
};

mock! {
    pub TopicQueryPort {}

    #[async_trait]
    impl TopicQuery for TopicQueryPort {
        async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError>;
        async fn find_topic_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError>;
    }
}

mock! {
    pub TopicRepositoryPort {}

    #[async_trait]
    impl TopicRepository for TopicRepositoryPort {
        async fn create_topic(&self, data: TopicData) -> Result<Topic, TopicRepositoryError>;
        async fn update_topic(
            &self,
            topic_id: TopicId,
            data: TopicData,
        ) -> Result<Topic, TopicRepositoryError>;
        async fn delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError>;
    }
}
