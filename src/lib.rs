// SPDX-License-Identifier: MIT OR Apache-2.0

//! clonesim - Cross-language code clone similarity
//!
//! Embeds code snippets with a text encoder and compares them with cosine
//! similarity. Shared modules for the clonesim CLI tool.

pub mod config;
pub mod demo;
pub mod encoder;
pub mod errors;
pub mod output;
pub mod scorer;
pub mod similarity;

pub use encoder::{Encoder, EncoderConfig, PoolingStrategy};
pub use errors::ScoreError;
pub use scorer::{Comparison, Embedding, ScorerOptions, SimilarityScorer};
pub use similarity::cosine_similarity;
