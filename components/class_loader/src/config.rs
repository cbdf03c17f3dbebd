//! Class loader configuration, loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "zs-runtime.toml";

/// Extension of compiled class artifacts.
pub const DEFAULT_COMPILED_EXTENSION: &str = "zcl";

/// Extension of class source files.
pub const DEFAULT_SOURCE_EXTENSION: &str = "zs";

/// Errors reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Parser diagnostic
        #[source]
        source: toml::de::Error,
    },
}

/// Where and how classes are looked up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Root directory searched for class artifacts
    pub class_path: PathBuf,

    /// Extension of compiled artifacts
    pub compiled_extension: String,

    /// Extension of source artifacts
    pub source_extension: String,

    /// External compiler program, invoked as `<compiler> <args>... <source>`
    pub compiler: Option<PathBuf>,

    /// Extra arguments passed to the compiler before the source path
    pub compiler_args: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            class_path: PathBuf::from("."),
            compiled_extension: DEFAULT_COMPILED_EXTENSION.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            compiler: None,
            compiler_args: Vec::new(),
        }
    }
}

impl LoaderConfig {
    /// Default configuration rooted at `class_path`.
    pub fn with_class_path(class_path: impl Into<PathBuf>) -> Self {
        Self {
            class_path: class_path.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, else from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// `<class_path>/<class_name>.<compiled_extension>`
    pub fn compiled_path(&self, class_name: &str) -> PathBuf {
        self.artifact_path(class_name, &self.compiled_extension)
    }

    /// `<class_path>/<class_name>.<source_extension>`
    pub fn source_path(&self, class_name: &str) -> PathBuf {
        self.artifact_path(class_name, &self.source_extension)
    }

    fn artifact_path(&self, class_name: &str, extension: &str) -> PathBuf {
        self.class_path.join(format!("{}.{}", class_name, extension))
    }
}
