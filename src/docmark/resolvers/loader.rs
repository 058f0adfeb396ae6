//! Reading lookup tables from disk.
//!
//! Tables are maps keyed by identifier, stored as JSON or YAML. The format is picked from the
//! file extension.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported table format for {} (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(TableFormat::Json),
            Some("yaml") | Some("yml") => Some(TableFormat::Yaml),
            _ => None,
        }
    }
}

/// Load and deserialize a lookup table.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Result<T, KnowledgeBaseError> {
    let format =
        TableFormat::from_path(path).ok_or_else(|| KnowledgeBaseError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    let source = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), ?format, "loading lookup table");

    match format {
        TableFormat::Json => {
            serde_json::from_str(&source).map_err(|source| KnowledgeBaseError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
        TableFormat::Yaml => {
            serde_yaml::from_str(&source).map_err(|source| KnowledgeBaseError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
