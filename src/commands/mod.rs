// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command handlers for the clonesim binary

pub mod compare;
pub mod demo;
pub mod embed;
pub mod models;

use anyhow::{Context, Result};

/// Returns the snippet itself, or the contents of the file it names.
pub fn read_snippet(arg: &str, from_file: bool) -> Result<String> {
    if from_file {
        std::fs::read_to_string(arg).with_context(|| format!("Failed to read snippet file {}", arg))
    } else {
        Ok(arg.to_string())
    }
}
