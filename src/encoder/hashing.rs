// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic feature-hashing encoder.
//!
//! Splits a snippet into lexical tokens (identifiers, numbers, single
//! punctuation characters), lowercases them, and counts each one at a bucket
//! chosen by the token's BLAKE3 hash. Counts never cancel, so only a snippet
//! without tokens maps to the zero vector. It needs no model files, so it is the
//! encoder used for offline runs and tests. Scores reflect shared vocabulary
//! rather than learned semantics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::encoder::provider::Encoder;
use crate::errors::ScoreError;

/// Matches the output width of MiniLM so the two are interchangeable in tests.
pub const DEFAULT_HASH_DIM: usize = 384;

/// Largest dimension accepted for `hash:<dim>`.
pub const MAX_HASH_DIM: usize = 65_536;

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z_][A-Za-z0-9_]*|[0-9]+(?:\.[0-9]+)?|[^\sA-Za-z0-9_]")
        .expect("valid token pattern")
});

pub struct HashingEncoder {
    model_id: String,
    dimension: usize,
}

impl HashingEncoder {
    /// Creates a hashing encoder. The dimension is clamped to `1..=MAX_HASH_DIM`.
    pub fn new(dimension: usize) -> Self {
        let dimension = dimension.clamp(1, MAX_HASH_DIM);
        Self {
            model_id: format!("hash:{}", dimension),
            dimension,
        }
    }

    fn encode(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; self.dimension];
        for token in tokenize(text) {
            vector[bucket_for(&token, self.dimension)] += 1.0;
        }
        vector
    }
}

impl Default for HashingEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_DIM)
    }
}

impl Encoder for HashingEncoder {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.dimension)
    }

    fn embed_texts(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>, ScoreError> {
        Ok(texts.iter().map(|text| self.encode(text)).collect())
    }
}

/// Lexical tokens of a snippet, lowercased.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

fn bucket_for(token: &str, dimension: usize) -> usize {
    let hash = blake3::hash(token.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[..8]);
    (u64::from_le_bytes(prefix) % dimension as u64) as usize
}
