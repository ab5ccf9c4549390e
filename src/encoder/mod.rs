// SPDX-License-Identifier: MIT OR Apache-2.0

//! Encoder module - turns code snippets into fixed-length vectors
//!
//! Every backend sits behind the [`Encoder`] trait and is chosen by a single
//! identifier string (see [`EncoderKind`]).

pub mod command;
pub mod hashing;
pub mod identifier;
pub mod onnx;
pub mod provider;

pub use command::CommandEncoder;
pub use hashing::{HashingEncoder, DEFAULT_HASH_DIM};
pub use identifier::EncoderKind;
pub use onnx::{list_models, FastEmbedEncoder, ModelListing};
pub use provider::{Encoder, EncoderConfig, PoolingStrategy, DEFAULT_MODEL};

use crate::errors::ScoreError;

/// Builds the encoder named by `config.model`.
pub fn build_encoder(config: &EncoderConfig) -> Result<Box<dyn Encoder>, ScoreError> {
    let kind: EncoderKind = config.model.parse()?;
    tracing::debug!(?kind, "resolved encoder identifier");

    let encoder: Box<dyn Encoder> = match kind {
        EncoderKind::Hashing { dimension } => Box::new(HashingEncoder::new(dimension)),
        EncoderKind::Command { command } => Box::new(CommandEncoder::new(command)),
        EncoderKind::OnnxDir { path } => Box::new(FastEmbedEncoder::from_dir(&path, config)?),
        EncoderKind::FastEmbed { model_code } => {
            Box::new(FastEmbedEncoder::builtin(&model_code, config)?)
        }
    };

    Ok(encoder)
}
