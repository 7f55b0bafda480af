mod topic_query;
mod topic_repository;

pub use topic_query::{TopicQuery, TopicQueryError};
pub use topic_repository::{TopicData, TopicRepository, TopicRepositoryError};
