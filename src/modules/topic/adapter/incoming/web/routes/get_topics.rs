use actix_web::{web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{domain::entities::Topic, ports::incoming::use_cases::GetTopicsError},
    AppState,
};

/// List every topic, oldest first
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    responses(
        (status = 200, description = "All topics ordered by id", body = Vec<Topic>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BasicAuth" = []))
)]
pub async fn get_topics_handler(_user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.topic.get_list.execute().await {
        Ok(topics) => ApiResponse::success(topics),
        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> actix_web::HttpResponse {
    match err {
        GetTopicsError::QueryFailed(msg) => {
            tracing::error!("Failed to list topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
