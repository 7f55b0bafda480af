use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::outgoing::{
        TopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
    },
};

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Topic>,
}

/// Storage double backed by an ordered map. Ids start at 1 and are never reused.
#[derive(Default, Clone)]
pub struct InMemoryTopicStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryTopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopicStore {
    async fn get_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_topic_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicQueryError> {
        Ok(self.inner.lock().unwrap().rows.get(&topic_id.value()).cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicStore {
    async fn create_topic(&self, data: TopicData) -> Result<Topic, TopicRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;

        let topic = Topic {
            id: TopicId::from(id),
            title: data.title,
            description: data.description,
        };
        inner.rows.insert(id, topic.clone());
        Ok(topic)
    }

    async fn update_topic(
        &self,
        topic_id: TopicId,
        data: TopicData,
    ) -> Result<Topic, TopicRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let row = inner
            .rows
            .get_mut(&topic_id.value())
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        row.title = data.title;
        row.description = data.description;
        Ok(row.clone())
    }

    async fn delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&topic_id.value())
            .map(|_| ())
            .ok_or(TopicRepositoryError::TopicNotFound)
    }
}
