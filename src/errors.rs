// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy shared by encoders, the similarity function and the scorer.

use thiserror::Error;

/// Errors surfaced by the scoring pipeline.
///
/// None of these are retried or recovered locally; they propagate to the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The named encoder could not be located or initialized.
    #[error("failed to load encoder '{model}': {reason}")]
    Load { model: String, reason: String },

    /// A snippet could not be tokenized or encoded.
    #[error("encoder '{model}' could not process snippet: {reason}")]
    Processing { model: String, reason: String },

    /// Two embeddings of different length were compared.
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

impl ScoreError {
    pub fn load(model: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Load {
            model: model.into(),
            reason: reason.to_string(),
        }
    }

    pub fn processing(model: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Processing {
            model: model.into(),
            reason: reason.to_string(),
        }
    }

    /// True for per-call failures that leave the scorer usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Processing { .. })
    }
}
