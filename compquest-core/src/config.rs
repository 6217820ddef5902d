//! Presentation configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::SharePayload;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub title: String,
    pub tagline: String,
    /// External question bank. `None` uses the built-in bank.
    pub bank: Option<PathBuf>,
    /// Log destination. `None` lets the front end pick its own location.
    pub log_file: Option<PathBuf>,
    pub share: ShareConfig,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: "CompQuest".into(),
            tagline: "Master computer fundamentals. Perfect for students and tech enthusiasts."
                .into(),
            bank: None,
            log_file: None,
            share: ShareConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: "CompQuest: Computer Basics Quiz".into(),
            text: "Check out this awesome Computer Basics quiz I am taking!".into(),
            url: "https://compquest.app".into(),
        }
    }
}

impl ShareConfig {
    pub fn payload(&self) -> SharePayload {
        SharePayload {
            title: self.title.clone(),
            text: self.text.clone(),
            url: self.url.clone(),
        }
    }
}

impl QuizConfig {
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Load from `path`. A missing file yields defaults; anything else that
    /// goes wrong is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content, &path.display().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
