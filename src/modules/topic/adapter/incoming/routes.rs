use actix_web::{middleware::from_fn, web};

use super::web::routes::{
    create_topic_handler, delete_topic_handler, get_single_topic_handler, get_topics_handler,
    update_topic_handler,
};
use crate::auth::adapter::incoming::web::middleware::require_basic_auth;

/// Binds the five topic endpoints. Basic auth guards the whole
/// `/api/topics` scope, so it runs before route and method matching.
pub fn configure_topic_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/topics")
            .wrap(from_fn(require_basic_auth))
            .service(
                web::resource("")
                    .route(web::get().to(get_topics_handler))
                    .route(web::post().to(create_topic_handler)),
            )
            .service(
                web::resource("/{topic_id}")
                    .route(web::get().to(get_single_topic_handler))
                    .route(web::put().to(update_topic_handler))
                    .route(web::delete().to(delete_topic_handler)),
            ),
    );
}
