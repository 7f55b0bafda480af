use actix_web::{web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::{
        adapter::incoming::web::routes::map_content_error,
        application::{
            domain::entities::{Topic, TopicId},
            ports::incoming::use_cases::{UpdateTopicCommand, UpdateTopicError},
        },
    },
    AppState,
};

/// Full replacement of a topic's content. The id comes from the path only.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTopicRequest {
    #[schema(example = "Hi")]
    pub title: Option<String>,

    #[schema(example = "World")]
    pub description: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(
        ("topic_id" = i64, Path, description = "Topic id")
    ),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = Topic),
        (status = 400, description = "Blank title or description", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    ),
    security(("BasicAuth" = []))
)]
pub async fn update_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let topic_id = TopicId::from(path.into_inner());
    let payload = payload.into_inner();

    let command = match UpdateTopicCommand::new(
        topic_id,
        payload.title.as_deref().unwrap_or_default(),
        payload.description.as_deref().unwrap_or_default(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_content_error(err),
    };

    match data.topic.update.execute(command).await {
        Ok(topic) => {
            tracing::info!(topic_id = %topic.id, user = %user.username, "Topic updated");
            ApiResponse::success(topic)
        }
        Err(err) => map_update_topic_error(err),
    }
}

fn map_update_topic_error(err: UpdateTopicError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound(_) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        UpdateTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to update topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
