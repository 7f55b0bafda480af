pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::topic;

use crate::auth::{
    adapter::outgoing::{CredentialConfig, InMemoryCredentialStore},
    application::ports::outgoing::CredentialVerifier,
};
use crate::config::{load_env_files, DatabaseConfig, ServerConfig};
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::topic::{
    adapter::{
        incoming::routes::configure_topic_routes,
        outgoing::{TopicQueryPostgres, TopicRepositoryPostgres},
    },
    application::{
        services::{
            CreateTopicService, DeleteTopicService, GetSingleTopicService, GetTopicsService,
            UpdateTopicService,
        },
        topic_use_cases::TopicUseCases,
    },
};

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), StartupError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();

    let server_config = ServerConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;
    let credential_config = CredentialConfig::from_env()?;

    // Database connection
    let conn = Database::connect(database_config.connect_options()).await?;

    if database_config.run_migrations {
        Migrator::up(&conn, None).await?;
        info!("Database schema is up to date");
    }

    let db_arc = Arc::new(conn);

    // Topic adapters and services
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));

    let topic_use_cases = TopicUseCases {
        create: Arc::new(CreateTopicService::new(topic_repo.clone())),
        get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
        get_single: Arc::new(GetSingleTopicService::new(topic_query.clone())),
        update: Arc::new(UpdateTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
        )),
        delete: Arc::new(DeleteTopicService::new(topic_query, topic_repo)),
    };

    let state = AppState {
        topic: topic_use_cases,
    };

    let credential_verifier: Arc<dyn CredentialVerifier + Send + Sync> =
        Arc::new(InMemoryCredentialStore::new(credential_config));

    let server_url = server_config.bind_address();
    info!("Server run on: {}", server_url);

    let openapi = api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&credential_verifier)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topic
    configure_topic_routes(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e}");
        eprintln!("Error starting app: {e}");
    }
}
