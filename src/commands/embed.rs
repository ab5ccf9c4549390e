// SPDX-License-Identifier: MIT OR Apache-2.0

//! Print the embedding of a snippet

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::read_snippet;
use clonesim::output::print_json;
use clonesim::{Embedding, SimilarityScorer};

/// Embedding result for JSON output
#[derive(Debug, Serialize)]
struct EmbedResult<'a> {
    model: &'a str,
    dimension: usize,
    embedding: &'a Embedding,
}

/// Run the embed command
pub fn run(
    scorer: &mut SimilarityScorer,
    snippet: &str,
    files: bool,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let snippet = read_snippet(snippet, files)?;
    let embedding = scorer.embed(&snippet)?;

    match format {
        OutputFormat::Json => {
            let result = EmbedResult {
                model: scorer.model_id(),
                dimension: embedding.dim(),
                embedding: &embedding,
            };
            print_json(&result, compact)?;
        }
        OutputFormat::Text => {
            let values: Vec<String> = embedding
                .as_slice()
                .iter()
                .map(|v| format!("{:.6}", v))
                .collect();
            println!("{}", values.join(" "));
        }
    }

    Ok(())
}
