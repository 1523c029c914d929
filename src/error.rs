use thiserror::Error;

pub type Result<T> = std::result::Result<T, CraneError>;

#[derive(Error, Debug)]
pub enum CraneError {
    #[error("missing required argument: {0}")]
    MissingRequiredArgument(&'static str),

    #[error("unable to determine home directory")]
    HomeDirUnavailable,

    #[error("failed to create directory {path}: {source}")]
    DirCreateFailed { path: String, source: std::io::Error },

    #[error("key generation failed: {0}")]
    KeyGenFailed(String),

    #[error("failed to create SSH config file {path}: {source}")]
    ConfigCreateFailed { path: String, source: std::io::Error },

    #[error("failed to open SSH config file {path} for append: {source}")]
    ConfigOpenFailed { path: String, source: std::io::Error },

    #[error("failed to write SSH config file {path}: {source}")]
    ConfigWriteFailed { path: String, source: std::io::Error },

    #[error("cannot read SSH config file {path}: {source}")]
    ConfigUnreadable { path: String, source: std::io::Error },

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
