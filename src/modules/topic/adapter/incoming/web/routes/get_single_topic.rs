use actix_web::{web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{
        domain::entities::{Topic, TopicId},
        ports::incoming::use_cases::GetSingleTopicError,
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(
        ("topic_id" = i64, Path, description = "Topic id")
    ),
    responses(
        (status = 200, description = "Topic found", body = Topic),
        (status = 400, description = "Topic id is not an integer", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    ),
    security(("BasicAuth" = []))
)]
pub async fn get_single_topic_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let topic_id = TopicId::from(path.into_inner());

    match data.topic.get_single.execute(topic_id).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(err) => map_get_single_topic_error(err),
    }
}

fn map_get_single_topic_error(err: GetSingleTopicError) -> actix_web::HttpResponse {
    match err {
        GetSingleTopicError::TopicNotFound(_) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        GetSingleTopicError::QueryFailed(msg) => {
            tracing::error!("Failed to fetch topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
