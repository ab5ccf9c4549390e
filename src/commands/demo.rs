// SPDX-License-Identifier: MIT OR Apache-2.0

//! Score the built-in example pairs

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use clonesim::demo::{run_pairs, DemoResult};
use clonesim::output::{colorize_code, colorize_label, colorize_score, print_json, use_colors};
use clonesim::SimilarityScorer;

#[derive(Debug, Serialize)]
struct DemoOutput<'a> {
    model: &'a str,
    results: &'a [DemoResult],
}

/// Run the demo command
pub fn run(scorer: &mut SimilarityScorer, format: OutputFormat, compact: bool) -> Result<()> {
    let results = run_pairs(scorer)?;

    match format {
        OutputFormat::Json => print_json(
            &DemoOutput {
                model: scorer.model_id(),
                results: &results,
            },
            compact,
        )?,
        OutputFormat::Text => {
            let use_color = use_colors();
            for (idx, result) in results.iter().enumerate() {
                if idx > 0 {
                    println!();
                }
                println!("{}", colorize_label(result.label, use_color));
                println!("  A: {}", colorize_code(result.code_a, use_color));
                println!("  B: {}", colorize_code(result.code_b, use_color));
                println!(
                    "  Similarity score: {}",
                    colorize_score(result.score, use_color)
                );
            }
        }
    }

    Ok(())
}
