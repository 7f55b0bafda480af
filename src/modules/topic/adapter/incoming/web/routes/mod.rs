mod create_topic;
mod delete_topic;
mod get_single_topic;
mod get_topics;
mod update_topic;

pub use create_topic::*;
pub use delete_topic::*;
pub use get_single_topic::*;
pub use get_topics::*;
pub use update_topic::*;

use actix_web::HttpResponse;

use crate::{
    shared::api::ApiResponse, topic::application::domain::entities::TopicContentError,
};

pub(crate) fn map_content_error(err: TopicContentError) -> HttpResponse {
    match err {
        TopicContentError::EmptyTitle => ApiResponse::bad_request("EMPTY_TITLE", &err.to_string()),
        TopicContentError::EmptyDescription => {
            ApiResponse::bad_request("EMPTY_DESCRIPTION", &err.to_string())
        }
    }
}
