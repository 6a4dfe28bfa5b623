use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid engine config{}: {source}", describe_path(.path.as_ref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_path(path: Option<&PathBuf>) -> String {
    path.map(|path| format!(" in {}", path.display()))
        .unwrap_or_default()
}
