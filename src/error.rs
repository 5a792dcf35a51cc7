use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read recipients from {path}")]
    ReadRecipients {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("recipients in {path} are not a JSON array of strings")]
    ParseRecipients {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot create log directory {}", path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
