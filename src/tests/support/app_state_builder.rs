use actix_web::web;
use std::sync::Arc;

use crate::tests::support::stubs::*;
use crate::topic::application::{
    ports::incoming::use_cases::{
        CreateTopicUseCase, DeleteTopicUseCase, GetSingleTopicUseCase, GetTopicsUseCase,
        UpdateTopicUseCase,
    },
    topic_use_cases::TopicUseCases,
};
use crate::AppState;

pub struct TestAppStateBuilder {
    create_topic: Arc<dyn CreateTopicUseCase + Send + Sync>,
    get_topics: Arc<dyn GetTopicsUseCase + Send + Sync>,
    get_single_topic: Arc<dyn GetSingleTopicUseCase + Send + Sync>,
    update_topic: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    delete_topic: Arc<dyn DeleteTopicUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_topic: Arc::new(StubCreateTopicUseCase),
            get_topics: Arc::new(StubGetTopicsUseCase::success(vec![])),
            get_single_topic: Arc::new(StubGetSingleTopicUseCase::not_found()),
            update_topic: Arc::new(StubUpdateTopicUseCase::not_found()),
            delete_topic: Arc::new(StubDeleteTopicUseCase::not_found()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_topic = Arc::new(uc);
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.get_topics = Arc::new(uc);
        self
    }

    pub fn with_get_single_topic(
        mut self,
        uc: impl GetSingleTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_topic = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_topic = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_topic = Arc::new(uc);
        self
    }

    /// Shares one set of use cases between all five slots
    pub fn with_topic_use_cases(mut self, use_cases: TopicUseCases) -> Self {
        self.create_topic = use_cases.create;
        self.get_topics = use_cases.get_list;
        self.get_single_topic = use_cases.get_single;
        self.update_topic = use_cases.update;
        self.delete_topic = use_cases.delete;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: TopicUseCases {
                create: self.create_topic,
                get_list: self.get_topics,
                get_single: self.get_single_topic,
                update: self.update_topic,
                delete: self.delete_topic,
            },
        })
    }
}
