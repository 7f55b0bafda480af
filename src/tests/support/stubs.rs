use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
        DeleteTopicUseCase, GetSingleTopicError, GetSingleTopicUseCase, GetTopicsError,
        GetTopicsUseCase, UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
    },
};

// ============================================================
// Create
// ============================================================

/// Echoes the command back with id 1
#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        let (title, description) = command.into_content().into_parts();
        Ok(Topic {
            id: TopicId::from(1),
            title,
            description,
        })
    }
}

// ============================================================
// List
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<Topic>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(data: Vec<Topic>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
        self.result.clone()
    }
}

// ============================================================
// Get single
// ============================================================

#[derive(Clone)]
pub struct StubGetSingleTopicUseCase {
    result: Option<Result<Topic, GetSingleTopicError>>,
}

impl StubGetSingleTopicUseCase {
    pub fn success(topic: Topic) -> Self {
        Self {
            result: Some(Ok(topic)),
        }
    }

    pub fn not_found() -> Self {
        Self { result: None }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Some(Err(GetSingleTopicError::QueryFailed(msg.into()))),
        }
    }
}

#[async_trait]
impl GetSingleTopicUseCase for StubGetSingleTopicUseCase {
    async fn execute(&self, topic_id: TopicId) -> Result<Topic, GetSingleTopicError> {
        match &self.result {
            Some(result) => result.clone(),
            None => Err(GetSingleTopicError::TopicNotFound(topic_id)),
        }
    }
}

// ============================================================
// Update
// ============================================================

#[derive(Clone)]
enum UpdateBehavior {
    Echo,
    NotFound,
    Failure(String),
}

#[derive(Clone)]
pub struct StubUpdateTopicUseCase {
    behavior: UpdateBehavior,
}

impl StubUpdateTopicUseCase {
    /// Returns the command's id and content as the updated topic
    pub fn echo() -> Self {
        Self {
            behavior: UpdateBehavior::Echo,
        }
    }

    pub fn not_found() -> Self {
        Self {
            behavior: UpdateBehavior::NotFound,
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            behavior: UpdateBehavior::Failure(msg.to_string()),
        }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<Topic, UpdateTopicError> {
        match &self.behavior {
            UpdateBehavior::Echo => {
                let id = command.topic_id();
                let (title, description) = command.into_content().into_parts();
                Ok(Topic {
                    id,
                    title,
                    description,
                })
            }
            UpdateBehavior::NotFound => Err(UpdateTopicError::TopicNotFound(command.topic_id())),
            UpdateBehavior::Failure(msg) => Err(UpdateTopicError::RepositoryError(msg.clone())),
        }
    }
}

// ============================================================
// Delete
// ============================================================

#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    found: bool,
    calls: Arc<AtomicUsize>,
}

impl StubDeleteTopicUseCase {
    pub fn success() -> Self {
        Self {
            found: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, topic_id: TopicId) -> Result<(), DeleteTopicError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.found {
            Ok(())
        } else {
            Err(DeleteTopicError::TopicNotFound(topic_id))
        }
    }
}
