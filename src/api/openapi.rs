use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::topic::{
    adapter::incoming::web::routes::{CreateTopicRequest, UpdateTopicRequest},
    application::domain::entities::Topic,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum Hub API",
        version = "1.0.0",
        description = "CRUD API for forum topics behind HTTP Basic authentication"
    ),
    paths(
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_single_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            Topic,
            CreateTopicRequest,
            UpdateTopicRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BasicAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Basic)
                        .description(Some("Username and password of the configured principal"))
                        .build(),
                ),
            )
        }
    }
}
