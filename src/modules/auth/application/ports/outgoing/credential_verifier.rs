use crate::auth::application::domain::entities::{BasicCredentials, Principal};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

pub trait CredentialVerifier {
    fn verify(&self, credentials: &BasicCredentials) -> Result<Principal, CredentialError>;

    /// Realm advertised in `WWW-Authenticate` challenges
    fn realm(&self) -> &str;
}
