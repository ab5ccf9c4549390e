// SPDX-License-Identifier: MIT OR Apache-2.0

//! List available encoder models

use anyhow::Result;

use crate::cli::OutputFormat;
use clonesim::encoder::{list_models, ModelListing, DEFAULT_HASH_DIM, DEFAULT_MODEL};
use clonesim::output::{colorize_detail, colorize_label, print_json, use_colors};

/// Run the models command
pub fn run(format: OutputFormat, compact: bool) -> Result<()> {
    let mut models = vec![ModelListing {
        name: "hash".to_string(),
        code: "hash".to_string(),
        dimension: DEFAULT_HASH_DIM,
        description: "Offline feature-hashing encoder (lexical, no model files)".to_string(),
    }];
    models.extend(list_models());

    match format {
        OutputFormat::Json => print_json(&models, compact)?,
        OutputFormat::Text => {
            let use_color = use_colors();
            println!("Default: {}", colorize_label(DEFAULT_MODEL, use_color));
            for model in &models {
                println!(
                    "{:<56} {:<32} {:>5}  {}",
                    colorize_label(&model.code, use_color),
                    model.name,
                    model.dimension,
                    colorize_detail(&model.description, use_color)
                );
            }
        }
    }

    Ok(())
}
