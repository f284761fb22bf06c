use std::path::PathBuf;

/// Errors that can occur when loading configuration.
///
/// Move rejections (`game::MoveError`) are deliberately not here: they are
/// expected control-flow outcomes of normal play, not failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
