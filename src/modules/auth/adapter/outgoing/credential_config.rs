use crate::config::{from_process_env, required, ConfigError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialConfig {
    pub username: String,
    pub password: String,
    pub role: String,
    pub realm: String,
}

impl CredentialConfig {
    /// Load the API principal from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(from_process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let with_default = |key: &'static str, default: &str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(_) => required(&lookup, key),
                None => Ok(default.to_string()),
            }
        };

        Ok(Self {
            username: with_default("AUTH_USERNAME", "user")?,
            password: with_default("AUTH_PASSWORD", "password")?,
            role: with_default("AUTH_ROLE", "USER")?,
            realm: with_default("AUTH_REALM", "forum-hub")?,
        })
    }
}
