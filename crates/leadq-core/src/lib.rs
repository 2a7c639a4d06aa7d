//! Shared domain types and configuration for the lead qualification workspace.
//!
//! The scoring engine lives in `leadq-scoring`; this crate only owns the
//! [`Lead`] record it consumes, the environment configuration, and the
//! repository seam callers use to store leads and their scores.

pub mod app_config;
pub mod config;
pub mod error;
pub mod lead;
pub mod repository;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_PROFILE};
pub use error::{ConfigError, CoreError, RepositoryError};
pub use lead::{BuyingIntent, Lead, LeadRecord, Priority};
pub use repository::{InMemoryLeadRepository, LeadFilter, LeadRepository};
