mod credential_config;
mod in_memory_credential_store;

pub use credential_config::CredentialConfig;
pub use in_memory_credential_store::InMemoryCredentialStore;
