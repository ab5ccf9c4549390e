// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compare two snippets

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::commands::read_snippet;
use clonesim::output::{colorize_detail, colorize_score, print_json, use_colors};
use clonesim::SimilarityScorer;

/// Run the compare command
pub fn run(
    scorer: &mut SimilarityScorer,
    code_a: &str,
    code_b: &str,
    files: bool,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let code_a = read_snippet(code_a, files)?;
    let code_b = read_snippet(code_b, files)?;

    let comparison = scorer.compare(&code_a, &code_b)?;

    match format {
        OutputFormat::Json => print_json(&comparison, compact)?,
        OutputFormat::Text => {
            let use_color = use_colors();
            println!(
                "Similarity score: {} {}",
                colorize_score(comparison.score, use_color),
                colorize_detail(
                    &format!("({}, dim {})", comparison.model, comparison.dimension),
                    use_color
                )
            );
        }
    }

    Ok(())
}
