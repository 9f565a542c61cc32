pub mod app_config;
pub mod settings_repo;

pub use settings_repo::{InMemorySettingsStore, SettingsStore};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid pricing settings: {0}")]
    InvalidSettings(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
