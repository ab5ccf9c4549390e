// SPDX-License-Identifier: MIT OR Apache-2.0

//! Similarity scorer: snippet -> embedding -> cosine score.
//!
//! The scorer owns one encoder for its whole lifetime. Every embedding it
//! produces is L2-normalized, so scores fall in [-1.0, 1.0] and equal the dot
//! product of the two embeddings. Both snippets of a comparison go through the
//! same encoder, and thus the same tokenizer and pooling.

use serde::Serialize;

use crate::encoder::{build_encoder, Encoder, EncoderConfig, DEFAULT_MODEL};
use crate::errors::ScoreError;
use crate::similarity::{cosine_similarity, l2_normalize};

/// A normalized, fixed-length snippet embedding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    /// Wraps and L2-normalizes a raw encoder output.
    pub fn normalized(mut values: Vec<f32>) -> Self {
        l2_normalize(&mut values);
        Self(values)
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Cosine similarity to another embedding of the same dimension.
    pub fn similarity(&self, other: &Embedding) -> Result<f32, ScoreError> {
        cosine_similarity(&self.0, &other.0)
    }
}

/// Result of comparing two snippets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub model: String,
    pub dimension: usize,
    pub score: f32,
}

/// Options applied by the scorer on top of its encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerOptions {
    /// Snippets with more characters than this are rejected.
    pub max_chars: usize,
}

impl Default for ScorerOptions {
    fn default() -> Self {
        Self {
            max_chars: EncoderConfig::default().max_chars,
        }
    }
}

impl From<&EncoderConfig> for ScorerOptions {
    fn from(config: &EncoderConfig) -> Self {
        Self {
            max_chars: config.max_chars,
        }
    }
}

pub struct SimilarityScorer {
    encoder: Box<dyn Encoder>,
    options: ScorerOptions,
    dimension: Option<usize>,
}

impl SimilarityScorer {
    pub fn new(encoder: Box<dyn Encoder>, options: ScorerOptions) -> Self {
        let dimension = encoder.dimension();
        Self {
            encoder,
            options,
            dimension,
        }
    }

    /// Builds the encoder named in `config` and wraps it.
    pub fn load(config: &EncoderConfig) -> Result<Self, ScoreError> {
        let encoder = build_encoder(config)?;
        tracing::info!(
            model = encoder.model_id(),
            dimension = ?encoder.dimension(),
            max_chars = config.max_chars,
            "encoder ready"
        );
        Ok(Self::new(encoder, ScorerOptions::from(config)))
    }

    /// Loads the default pretrained encoder.
    pub fn load_default() -> Result<Self, ScoreError> {
        Self::load(&EncoderConfig {
            model: DEFAULT_MODEL.to_string(),
            ..EncoderConfig::default()
        })
    }

    pub fn model_id(&self) -> &str {
        self.encoder.model_id()
    }

    /// Embedding dimension, once known.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Embeds one snippet.
    pub fn embed(&mut self, snippet: &str) -> Result<Embedding, ScoreError> {
        let chars = snippet.chars().count();
        if chars > self.options.max_chars {
            return Err(ScoreError::processing(
                self.encoder.model_id(),
                format!(
                    "snippet has {} characters, limit is {}",
                    chars, self.options.max_chars
                ),
            ));
        }

        let values = self.encoder.embed_one(snippet)?;
        match self.dimension {
            Some(expected) if expected != values.len() => {
                return Err(ScoreError::DimensionMismatch {
                    left: expected,
                    right: values.len(),
                });
            }
            Some(_) => {}
            None => self.dimension = Some(values.len()),
        }

        tracing::debug!(chars, dimension = values.len(), "embedded snippet");
        Ok(Embedding::normalized(values))
    }

    /// Cosine similarity of two independently embedded snippets.
    pub fn similarity(&mut self, code_a: &str, code_b: &str) -> Result<f32, ScoreError> {
        let a = self.embed(code_a)?;
        let b = self.embed(code_b)?;
        a.similarity(&b)
    }

    /// Like [`Self::similarity`], with the model and dimension attached.
    pub fn compare(&mut self, code_a: &str, code_b: &str) -> Result<Comparison, ScoreError> {
        let a = self.embed(code_a)?;
        let b = self.embed(code_b)?;
        let score = a.similarity(&b)?;
        Ok(Comparison {
            model: self.model_id().to_string(),
            dimension: a.dim(),
            score,
        })
    }
}
