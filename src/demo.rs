// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in example pairs for `clonesim demo`.

use serde::Serialize;

use crate::errors::ScoreError;
use crate::scorer::SimilarityScorer;

/// Two snippets and what relationship between them is expected.
#[derive(Debug, Clone, Copy)]
pub struct DemoPair {
    pub label: &'static str,
    pub code_a: &'static str,
    pub code_b: &'static str,
}

pub const DEMO_PAIRS: &[DemoPair] = &[
    DemoPair {
        label: "same function, Python vs Java",
        code_a: "def add(a, b): return a + b",
        code_b: "int add(int a, int b) { return a + b; }",
    },
    DemoPair {
        label: "similar function, Python vs Java",
        code_a: "def subtract(a, b): return a - b",
        code_b: "int subtract(int a, int b) { return a - b; }",
    },
    DemoPair {
        label: "different functions, Python vs Java",
        code_a: "def multiply(a, b): return a * b",
        code_b: "int divide(int a, int b) { return a / b; }",
    },
    DemoPair {
        label: "same semantics, both Python",
        code_a: "def add(a, b): return a + b",
        code_b: "def sum(a, b): return a + b",
    },
];

/// Score of one demo pair.
#[derive(Debug, Clone, Serialize)]
pub struct DemoResult {
    pub label: &'static str,
    pub code_a: &'static str,
    pub code_b: &'static str,
    pub score: f32,
}

/// Scores every demo pair with the given scorer, stopping at the first error.
pub fn run_pairs(scorer: &mut SimilarityScorer) -> Result<Vec<DemoResult>, ScoreError> {
    DEMO_PAIRS
        .iter()
        .map(|pair| {
            let score = scorer.similarity(pair.code_a, pair.code_b)?;
            Ok(DemoResult {
                label: pair.label,
                code_a: pair.code_a,
                code_b: pair.code_b,
                score,
            })
        })
        .collect()
}
