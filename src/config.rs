// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for clonesim
//!
//! Loads configuration from .clonesimrc.toml in current directory or ~/.config/clonesim/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::encoder::{EncoderConfig, PoolingStrategy};

pub const LOCAL_CONFIG_FILE: &str = ".clonesimrc.toml";

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Encoder configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EncoderSection {
    /// Encoder identifier (jina-code, minilm, hash, onnx:<dir>, command:<cmd>)
    pub model: Option<String>,
    /// Pooling for local ONNX models (cls, mean)
    pub pooling: Option<PoolingStrategy>,
    /// Maximum snippet length in characters
    pub max_chars: Option<usize>,
    /// Tokenizer truncation length
    pub max_length: Option<usize>,
    /// Model cache directory
    pub cache_dir: Option<PathBuf>,
    /// Whether to show a progress bar while downloading models
    pub show_download_progress: Option<bool>,
}

impl EncoderSection {
    /// Builds an encoder config, filling unset fields with defaults.
    ///
    /// Zero lengths are treated as unset.
    pub fn to_encoder_config(&self) -> EncoderConfig {
        let defaults = EncoderConfig::default();
        EncoderConfig {
            model: self.model.clone().unwrap_or(defaults.model),
            pooling: self.pooling.unwrap_or(defaults.pooling),
            max_chars: self
                .max_chars
                .filter(|&n| n > 0)
                .unwrap_or(defaults.max_chars),
            max_length: self
                .max_length
                .filter(|&n| n > 0)
                .unwrap_or(defaults.max_length),
            cache_dir: self.cache_dir.clone().or(defaults.cache_dir),
            show_download_progress: self
                .show_download_progress
                .unwrap_or(defaults.show_download_progress),
        }
    }
}

/// Configuration loaded from .clonesimrc.toml or ~/.config/clonesim/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (text or json)
    pub default_format: Option<String>,

    /// Encoder configuration
    #[serde(default)]
    pub encoder: EncoderSection,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .clonesimrc.toml in current directory
    /// 2. ~/.config/clonesim/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(Path::new(LOCAL_CONFIG_FILE)) {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("clonesim").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Parses one config file. Missing or malformed files yield `None`.
    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
                None
            }
        }
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format
            .as_ref()
            .and_then(|s| match s.to_lowercase().as_str() {
                "json" => Some(ConfigOutputFormat::Json),
                "text" => Some(ConfigOutputFormat::Text),
                _ => None,
            })
    }

    /// Get the encoder configuration
    pub fn encoder(&self) -> &EncoderSection {
        &self.encoder
    }
}
