//! Output and color utilities for consistent terminal formatting
//!
//! Provides shared color functions respecting NO_COLOR environment variable.

use colored::Colorize;
use serde::Serialize;

/// Scores at or above this are printed green.
pub const HIGH_SCORE: f32 = 0.8;
/// Scores at or above this (and below [`HIGH_SCORE`]) are printed yellow.
pub const MEDIUM_SCORE: f32 = 0.5;

/// Check if colors should be used (respects NO_COLOR env var)
pub fn use_colors() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Format a score with six decimals, colored by band
pub fn colorize_score(score: f32, use_color: bool) -> String {
    let text = format!("{:.6}", score);
    if !use_color {
        return text;
    }
    if score >= HIGH_SCORE {
        text.green().bold().to_string()
    } else if score >= MEDIUM_SCORE {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// Colorize a label (bold)
pub fn colorize_label(text: &str, use_color: bool) -> String {
    if use_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Colorize a code snippet (cyan)
pub fn colorize_code(text: &str, use_color: bool) -> String {
    if use_color {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Colorize secondary details (dimmed)
pub fn colorize_detail(text: &str, use_color: bool) -> String {
    if use_color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Serialize a value as JSON, pretty unless `compact`
pub fn to_json<T: Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

/// Print a value as JSON to stdout
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> serde_json::Result<()> {
    println!("{}", to_json(value, compact)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_score_has_six_decimals() {
        assert_eq!(colorize_score(0.5, false), "0.500000");
        assert_eq!(colorize_score(-0.25, false), "-0.250000");
    }

    #[test]
    fn plain_helpers_pass_through() {
        assert_eq!(colorize_label("x", false), "x");
        assert_eq!(colorize_code("fn a()", false), "fn a()");
        assert_eq!(colorize_detail("dim", false), "dim");
    }

    #[test]
    fn json_compact_and_pretty() {
        let value = serde_json::json!({"score": 1.0});
        assert_eq!(to_json(&value, true).unwrap(), "{\"score\":1.0}");
        assert!(to_json(&value, false).unwrap().contains('\n'));
    }
}
