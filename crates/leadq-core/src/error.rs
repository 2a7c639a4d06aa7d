use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid priority: {0}")]
    InvalidPriority(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("lead {0} not found")]
    NotFound(i64),
}
