// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of encoder identifiers.

use std::path::PathBuf;
use std::str::FromStr;

use crate::encoder::hashing::{DEFAULT_HASH_DIM, MAX_HASH_DIM};
use crate::errors::ScoreError;

/// The encoder an identifier resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderKind {
    /// `hash` or `hash:<dim>`
    Hashing { dimension: usize },
    /// `command:<shell command>`
    Command { command: String },
    /// `onnx:<dir>`
    OnnxDir { path: PathBuf },
    /// `fastembed:<code>` or a bare model code/alias
    FastEmbed { model_code: String },
}

impl FromStr for EncoderKind {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            return Err(ScoreError::load(s, "encoder identifier is empty"));
        }

        let (scheme, rest) = match id.split_once(':') {
            Some((scheme, rest)) => (scheme.to_lowercase(), Some(rest)),
            None => (id.to_lowercase(), None),
        };

        match (scheme.as_str(), rest) {
            ("hash", None) => Ok(EncoderKind::Hashing {
                dimension: DEFAULT_HASH_DIM,
            }),
            ("hash", Some(dim)) => match dim.trim().parse::<usize>() {
                Ok(0) => Err(ScoreError::load(id, "hash dimension must be positive")),
                Ok(dimension) if dimension > MAX_HASH_DIM => Err(ScoreError::load(
                    id,
                    format!("hash dimension {} exceeds {}", dimension, MAX_HASH_DIM),
                )),
                Ok(dimension) => Ok(EncoderKind::Hashing { dimension }),
                Err(_) => Err(ScoreError::load(
                    id,
                    format!("invalid hash dimension '{}'", dim.trim()),
                )),
            },
            ("command", Some(command)) if !command.trim().is_empty() => {
                Ok(EncoderKind::Command {
                    command: command.trim().to_string(),
                })
            }
            ("command", _) => Err(ScoreError::load(id, "command encoder needs a command")),
            ("onnx", Some(path)) if !path.trim().is_empty() => Ok(EncoderKind::OnnxDir {
                path: PathBuf::from(path.trim()),
            }),
            ("onnx", _) => Err(ScoreError::load(id, "onnx encoder needs a model directory")),
            ("fastembed", Some(code)) if !code.trim().is_empty() => {
                Ok(EncoderKind::FastEmbed {
                    model_code: code.trim().to_string(),
                })
            }
            ("fastembed", _) => Err(ScoreError::load(id, "fastembed encoder needs a model code")),
            // Model codes never contain ':', so anything else is a bare code.
            _ => Ok(EncoderKind::FastEmbed {
                model_code: id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(id: &str) -> Result<EncoderKind, ScoreError> {
        id.parse()
    }

    #[test]
    fn test_hash_identifiers() {
        assert_eq!(
            parse("hash").unwrap(),
            EncoderKind::Hashing {
                dimension: DEFAULT_HASH_DIM
            }
        );
        assert_eq!(
            parse("HASH:64").unwrap(),
            EncoderKind::Hashing { dimension: 64 }
        );
        assert!(matches!(parse("hash:0"), Err(ScoreError::Load { .. })));
        assert!(matches!(parse("hash:big"), Err(ScoreError::Load { .. })));
    }

    #[test]
    fn test_hash_dimension_is_bounded() {
        assert_eq!(
            parse("hash:65536").unwrap(),
            EncoderKind::Hashing {
                dimension: MAX_HASH_DIM
            }
        );
        for id in ["hash:65537", "hash:99999999999999"] {
            match parse(id) {
                Err(ScoreError::Load { reason, .. }) => assert!(reason.contains("exceeds")),
                other => panic!("{id}: expected load error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_command_keeps_colons() {
        assert_eq!(
            parse("command:embed --url http://localhost:8080").unwrap(),
            EncoderKind::Command {
                command: "embed --url http://localhost:8080".to_string()
            }
        );
        assert!(parse("command:").is_err());
        assert!(parse("command").is_err());
    }

    #[test]
    fn test_onnx_dir() {
        assert_eq!(
            parse("onnx:models/codebert").unwrap(),
            EncoderKind::OnnxDir {
                path: PathBuf::from("models/codebert")
            }
        );
        assert!(parse("onnx: ").is_err());
    }

    #[test]
    fn test_fastembed_codes() {
        assert_eq!(
            parse("fastembed:Xenova/bge-small-en-v1.5").unwrap(),
            EncoderKind::FastEmbed {
                model_code: "Xenova/bge-small-en-v1.5".to_string()
            }
        );
        assert_eq!(
            parse("minilm").unwrap(),
            EncoderKind::FastEmbed {
                model_code: "minilm".to_string()
            }
        );
        assert!(parse("fastembed:").is_err());
    }

    #[test]
    fn test_empty_identifier() {
        assert!(matches!(parse("   "), Err(ScoreError::Load { .. })));
    }
}
