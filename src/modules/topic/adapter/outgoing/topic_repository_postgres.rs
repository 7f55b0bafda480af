use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, Unchanged};
use std::sync::Arc;

use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::outgoing::{TopicData, TopicRepository, TopicRepositoryError},
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: TopicData) -> Result<Topic, TopicRepositoryError> {
        // id comes from the BIGSERIAL column
        let active = TopicActiveModel {
            title: Set(data.title),
            description: Set(data.description),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(Topic::from(inserted))
    }

    async fn update_topic(
        &self,
        topic_id: TopicId,
        data: TopicData,
    ) -> Result<Topic, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Unchanged(topic_id.value()),
            title: Set(data.title),
            description: Set(data.description),
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TopicRepositoryError::TopicNotFound,
            other => map_db_err(other),
        })?;

        Ok(Topic::from(updated))
    }

    async fn delete_topic(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::delete_by_id(topic_id.value())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(e.to_string())
}
