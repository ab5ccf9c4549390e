// SPDX-License-Identifier: MIT OR Apache-2.0

//! Encoder interface and configuration.
//!
//! An encoder turns a snippet of text into one fixed-length vector. The
//! pooling strategy and model are fixed when the encoder is built, so every
//! snippet embedded by the same instance is reduced the same way.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::ScoreError;

/// Default encoder: Jina's code embedding model from the fastembed catalogue.
pub const DEFAULT_MODEL: &str = "jina-code";
pub const DEFAULT_MAX_CHARS: usize = 2000;
pub const DEFAULT_MAX_LENGTH: usize = 512;

pub const MODEL_ENV: &str = "CLONESIM_MODEL";
pub const POOLING_ENV: &str = "CLONESIM_POOLING";
pub const MAX_CHARS_ENV: &str = "CLONESIM_MAX_CHARS";

/// How per-token vectors are reduced to one vector for local ONNX models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolingStrategy {
    /// Vector at the distinguished summary position (`[CLS]` / `<s>`).
    #[default]
    Cls,
    /// Attention-masked mean over all token vectors.
    Mean,
}

impl fmt::Display for PoolingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolingStrategy::Cls => write!(f, "cls"),
            PoolingStrategy::Mean => write!(f, "mean"),
        }
    }
}

impl FromStr for PoolingStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cls" => Ok(PoolingStrategy::Cls),
            "mean" => Ok(PoolingStrategy::Mean),
            other => Err(format!("Unknown pooling strategy: {}", other)),
        }
    }
}

/// Everything needed to build an encoder and a scorer around it.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderConfig {
    /// Encoder identifier, see [`crate::encoder::EncoderKind`].
    pub model: String,
    /// Pooling for local ONNX model directories.
    pub pooling: PoolingStrategy,
    /// Snippets longer than this many characters are rejected.
    pub max_chars: usize,
    /// Tokenizer truncation length passed to fastembed.
    pub max_length: usize,
    /// Where fastembed caches downloaded models.
    pub cache_dir: Option<PathBuf>,
    pub show_download_progress: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            pooling: PoolingStrategy::default(),
            max_chars: DEFAULT_MAX_CHARS,
            max_length: DEFAULT_MAX_LENGTH,
            cache_dir: None,
            show_download_progress: true,
        }
    }
}

impl EncoderConfig {
    /// Applies `CLONESIM_*` environment overrides.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored. A zero `max_chars` falls back to the default.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = non_empty(lookup(MODEL_ENV)) {
            self.model = model;
        }

        if let Some(raw) = non_empty(lookup(POOLING_ENV)) {
            self.pooling = match raw.parse::<PoolingStrategy>() {
                Ok(pooling) => pooling,
                Err(err) => bail!("Invalid {} value: {}", POOLING_ENV, err),
            };
        }

        if let Some(raw) = non_empty(lookup(MAX_CHARS_ENV)) {
            let max_chars = raw
                .parse::<usize>()
                .with_context(|| format!("Invalid {} value: {}", MAX_CHARS_ENV, raw))?;
            self.max_chars = if max_chars == 0 {
                DEFAULT_MAX_CHARS
            } else {
                max_chars
            };
        }

        Ok(self)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trait for text encoders.
pub trait Encoder: Send {
    /// Returns the model identifier.
    fn model_id(&self) -> &str;

    /// Output dimension, when known without running the model.
    fn dimension(&self) -> Option<usize>;

    /// Generates one embedding per input text.
    fn embed_texts(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>, ScoreError>;

    /// Generates an embedding for a single text.
    fn embed_one(&mut self, text: &str) -> Result<Vec<f32>, ScoreError> {
        let mut result = self.embed_texts(&[text.to_string()])?;
        if result.len() != 1 {
            return Err(ScoreError::processing(
                self.model_id(),
                format!("expected 1 embedding, encoder returned {}", result.len()),
            ));
        }
        result
            .pop()
            .ok_or_else(|| ScoreError::processing(self.model_id(), "no embedding returned"))
    }
}
