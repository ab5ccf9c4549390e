// SPDX-License-Identifier: MIT OR Apache-2.0

//! Encoder that shells out to an external process.
//!
//! The command receives `{"model": <id>, "texts": [...]}` on stdin and must
//! print either a JSON array of vectors or an object holding one under
//! `embeddings`, `vectors` or `data`.

use serde_json::Value;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::encoder::provider::Encoder;
use crate::errors::ScoreError;

pub struct CommandEncoder {
    command: String,
    model: String,
}

impl CommandEncoder {
    pub fn new(command: String) -> Self {
        let model = format!("command:{}", command);
        Self { command, model }
    }

    fn fail(&self, reason: impl std::fmt::Display) -> ScoreError {
        ScoreError::processing(&self.model, reason)
    }

    fn run_command(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ScoreError> {
        let payload = serde_json::json!({
            "model": self.model,
            "texts": texts,
        });

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.fail(format!("failed to spawn '{}': {}", self.command, e)))?;

        // A command may exit without reading its input; the exit status and
        // stdout decide the outcome then.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(payload.to_string().as_bytes()) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    tracing::debug!(command = %self.command, "command closed stdin early");
                }
                Err(e) => {
                    return Err(self.fail(format!("failed to write payload to stdin: {}", e)));
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| self.fail(format!("failed to read command output: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.fail(format!(
                "command failed (status {}): {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let parsed: Value = serde_json::from_str(stdout.trim())
            .map_err(|e| self.fail(format!("output is not JSON: {}", e)))?;

        parse_vectors(parsed).map_err(|reason| self.fail(reason))
    }
}

impl Encoder for CommandEncoder {
    fn model_id(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> Option<usize> {
        None
    }

    fn embed_texts(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>, ScoreError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.run_command(texts)
    }
}

fn parse_vectors(parsed: Value) -> Result<Vec<Vec<f32>>, String> {
    let rows = match parsed {
        Value::Array(arr) => arr,
        Value::Object(mut obj) => {
            let value = ["embeddings", "vectors", "data"]
                .iter()
                .find_map(|key| obj.remove(*key))
                .ok_or_else(|| "output missing 'embeddings' field".to_string())?;
            match value {
                Value::Array(arr) => arr,
                _ => return Err("embeddings must be a JSON array".to_string()),
            }
        }
        _ => return Err("output must be a JSON array or object".to_string()),
    };

    rows.iter()
        .map(|row| {
            row.as_array()
                .ok_or_else(|| "embedding row must be an array".to_string())?
                .iter()
                .map(|value| {
                    value
                        .as_f64()
                        .map(|v| v as f32)
                        .ok_or_else(|| "embedding value must be a number".to_string())
                })
                .collect::<Result<Vec<f32>, String>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_array_and_object_forms() {
        assert_eq!(
            parse_vectors(json!([[1.0, 2.0], [3, 4]])).unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
        assert_eq!(
            parse_vectors(json!({"vectors": [[0.5]]})).unwrap(),
            vec![vec![0.5]]
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_vectors(json!({"other": []})).is_err());
        assert!(parse_vectors(json!([["a"]])).is_err());
        assert!(parse_vectors(json!([1.0])).is_err());
        assert!(parse_vectors(json!("nope")).is_err());
    }

    #[test]
    fn test_command_round_trip() {
        let mut encoder = CommandEncoder::new("cat > /dev/null; echo '[[3, 4]]'".to_string());
        assert!(encoder.model_id().starts_with("command:"));
        assert_eq!(encoder.embed_one("anything").unwrap(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_command_ignoring_stdin_succeeds() {
        let mut encoder = CommandEncoder::new("echo '[[1, 2]]'".to_string());
        // Larger than a pipe buffer, so the write outlives the command.
        let snippet = "x".repeat(1 << 20);
        for _ in 0..20 {
            assert_eq!(encoder.embed_one(&snippet).unwrap(), vec![1.0, 2.0]);
        }
    }

    #[test]
    fn test_command_failure_is_processing_error() {
        let mut encoder = CommandEncoder::new("cat > /dev/null; echo boom >&2; exit 3".to_string());
        let err = encoder.embed_one("x").unwrap_err();
        match err {
            ScoreError::Processing { reason, .. } => assert!(reason.contains("boom")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_batch_skips_command() {
        let mut encoder = CommandEncoder::new("exit 1".to_string());
        assert!(encoder.embed_texts(&[]).unwrap().is_empty());
    }
}
