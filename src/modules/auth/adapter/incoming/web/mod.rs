pub mod extractors;
pub mod middleware;
