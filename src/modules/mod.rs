pub mod auth;
pub mod topic;
