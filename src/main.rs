// SPDX-License-Identifier: MIT OR Apache-2.0

//! clonesim - Cross-language code clone similarity
//!
//! Embeds code snippets with a pretrained encoder and compares the
//! embeddings with cosine similarity.

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, CliPooling, Commands, OutputFormat};
use clonesim::config::{Config, ConfigOutputFormat};
use clonesim::{EncoderConfig, PoolingStrategy, SimilarityScorer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing with CLONESIM_LOG env var (e.g., CLONESIM_LOG=debug clonesim demo)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("CLONESIM_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let Cli {
        format,
        compact,
        model,
        pooling,
        max_chars,
        command,
    } = Cli::parse();

    let config = Config::load();
    let format = format.unwrap_or(match config.output_format() {
        Some(ConfigOutputFormat::Json) => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    // CLI flags override environment, which overrides the config file
    let mut encoder_config: EncoderConfig = config.encoder().to_encoder_config().apply_env()?;
    if let Some(model) = model {
        encoder_config.model = model;
    }
    if let Some(pooling) = pooling {
        encoder_config.pooling = match pooling {
            CliPooling::Cls => PoolingStrategy::Cls,
            CliPooling::Mean => PoolingStrategy::Mean,
        };
    }
    if let Some(max_chars) = max_chars {
        encoder_config.max_chars = max_chars;
    }

    match command {
        Commands::Compare {
            code_a,
            code_b,
            files,
        } => {
            let mut scorer = SimilarityScorer::load(&encoder_config)?;
            commands::compare::run(&mut scorer, &code_a, &code_b, files, format, compact)?;
        }
        Commands::Embed { snippet, files } => {
            let mut scorer = SimilarityScorer::load(&encoder_config)?;
            commands::embed::run(&mut scorer, &snippet, files, format, compact)?;
        }
        Commands::Demo => {
            let mut scorer = SimilarityScorer::load(&encoder_config)?;
            commands::demo::run(&mut scorer, format, compact)?;
        }
        Commands::Models => {
            commands::models::run(format, compact)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "clonesim", &mut std::io::stdout());
        }
    }

    Ok(())
}
