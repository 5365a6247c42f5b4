//! Error types for orrery-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the registry.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// All errors that can arise from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The operation referenced a name with no record.
    #[error("planet {name} not found")]
    NotFound { name: String },

    /// A create or rename targeted a name that already has a record.
    #[error("planet {name} already exists")]
    AlreadyExists { name: String },

    /// A measurement was not strictly positive, or an operand did not resolve.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O failure while reading a catalog or script.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An explicitly requested catalog file did not exist.
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// The operation script file did not exist.
    #[error("script not found at {path}")]
    ScriptNotFound { path: PathBuf },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.orrery/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

impl RegistryError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub(crate) fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_planet() {
        assert_eq!(
            RegistryError::not_found("Vulcan").to_string(),
            "planet Vulcan not found"
        );
        assert_eq!(
            RegistryError::already_exists("Earth").to_string(),
            "planet Earth already exists"
        );
    }

    #[test]
    fn home_not_found_error_message() {
        assert!(RegistryError::HomeNotFound.to_string().contains("home directory"));
    }
}
