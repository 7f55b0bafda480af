use actix_web::{web, HttpResponse, Responder};

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{domain::entities::TopicId, ports::incoming::use_cases::DeleteTopicError},
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(
        ("topic_id" = i64, Path, description = "Topic id")
    ),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    ),
    security(("BasicAuth" = []))
)]
pub async fn delete_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let topic_id = TopicId::from(path.into_inner());

    match data.topic.delete.execute(topic_id).await {
        Ok(()) => {
            tracing::info!(topic_id = %topic_id, user = %user.username, "Topic deleted");
            ApiResponse::no_content()
        }
        Err(err) => map_delete_topic_error(err),
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound(_) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        DeleteTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to delete topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
