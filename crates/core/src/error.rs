use thiserror::Error;

/// Startup configuration failures. Always fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    MissingVar(&'static str),
}
