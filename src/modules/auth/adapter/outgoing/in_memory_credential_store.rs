use crate::auth::{
    adapter::outgoing::CredentialConfig,
    application::{
        domain::entities::{BasicCredentials, Principal},
        ports::outgoing::{CredentialError, CredentialVerifier},
        services::password_digest::{constant_time_eq, digest_password},
    },
};

/// Holds the one configured principal for the lifetime of the process.
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct InMemoryCredentialStore {
    username: String,
    username_digest: String,
    password_digest: String,
    role: String,
    realm: String,
}

impl InMemoryCredentialStore {
    pub fn new(config: CredentialConfig) -> Self {
        Self {
            username_digest: digest_password(&config.username),
            password_digest: digest_password(&config.password),
            username: config.username,
            role: config.role,
            realm: config.realm,
        }
    }
}

impl CredentialVerifier for InMemoryCredentialStore {
    fn verify(&self, credentials: &BasicCredentials) -> Result<Principal, CredentialError> {
        // Fixed-length digests, compared in constant time
        let username_matches = constant_time_eq(
            digest_password(&credentials.username).as_bytes(),
            self.username_digest.as_bytes(),
        );
        let password_matches = constant_time_eq(
            digest_password(&credentials.password).as_bytes(),
            self.password_digest.as_bytes(),
        );

        if username_matches && password_matches {
            Ok(Principal {
                username: self.username.clone(),
                role: self.role.clone(),
            })
        } else {
            Err(CredentialError::InvalidCredentials)
        }
    }

    fn realm(&self) -> &str {
        &self.realm
    }
}
