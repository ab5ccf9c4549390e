// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// clonesim - Cross-language code clone similarity
///
/// Embeds two code snippets with a pretrained encoder and prints the cosine
/// similarity of the embeddings.
#[derive(Parser, Debug)]
#[command(name = "clonesim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Encoder identifier (jina-code, minilm, hash[:dim], onnx:<dir>, command:<cmd>)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Pooling strategy for local ONNX models
    #[arg(long, value_enum, global = true)]
    pub pooling: Option<CliPooling>,

    /// Reject snippets longer than this many characters
    #[arg(long, global = true, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_chars: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Pooling strategy for local ONNX models
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliPooling {
    /// Vector at the summary position ([CLS] / <s>)
    Cls,
    /// Mean of all token vectors
    Mean,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the similarity of two snippets
    #[command(alias = "c")]
    Compare {
        /// First snippet (or file path with --files)
        code_a: String,

        /// Second snippet (or file path with --files)
        code_b: String,

        /// Treat the arguments as paths to files holding the snippets
        #[arg(short, long)]
        files: bool,
    },

    /// Print the normalized embedding of a snippet
    Embed {
        /// Snippet (or file path with --files)
        snippet: String,

        /// Treat the argument as a path to a file holding the snippet
        #[arg(short, long)]
        files: bool,
    },

    /// Score the built-in example pairs
    Demo,

    /// List available encoder models
    Models,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
