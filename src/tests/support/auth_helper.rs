use actix_web::{http::header, web};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

use crate::auth::{
    adapter::outgoing::{CredentialConfig, InMemoryCredentialStore},
    application::ports::outgoing::CredentialVerifier,
};

pub const TEST_USERNAME: &str = "user";
pub const TEST_PASSWORD: &str = "password";

/// Verifier for `user` / `password` with role `USER` in realm `forum-hub`
pub fn credential_verifier() -> web::Data<Arc<dyn CredentialVerifier + Send + Sync>> {
    let config = CredentialConfig {
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
        role: "USER".to_string(),
        realm: "forum-hub".to_string(),
    };

    let verifier: Arc<dyn CredentialVerifier + Send + Sync> =
        Arc::new(InMemoryCredentialStore::new(config));
    web::Data::new(verifier)
}

pub fn basic_auth(username: &str, password: &str) -> (header::HeaderName, String) {
    let encoded = STANDARD.encode(format!("{}:{}", username, password));
    (header::AUTHORIZATION, format!("Basic {}", encoded))
}

pub fn valid_auth() -> (header::HeaderName, String) {
    basic_auth(TEST_USERNAME, TEST_PASSWORD)
}
