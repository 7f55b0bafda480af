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
            domain::entities::Topic,
            ports::incoming::use_cases::{CreateTopicCommand, CreateTopicError},
        },
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Missing fields are treated as blank. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    #[schema(example = "Hello")]
    pub title: Option<String>,

    #[schema(example = "World")]
    pub description: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 200, description = "Topic created", body = Topic),
        (status = 400, description = "Blank title or description", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
    ),
    security(("BasicAuth" = []))
)]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match CreateTopicCommand::new(
        payload.title.as_deref().unwrap_or_default(),
        payload.description.as_deref().unwrap_or_default(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_content_error(err),
    };

    // 2️⃣ Execute use case
    match data.topic.create.execute(command).await {
        Ok(topic) => {
            tracing::info!(topic_id = %topic.id, user = %user.username, "Topic created");
            ApiResponse::success(topic)
        }
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to create topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
