// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relative-ordering checks against the default pretrained encoder.
//!
//! These download model weights on first run:
//! `cargo test --test pretrained_scenarios -- --ignored`

use clonesim::SimilarityScorer;

const ADD_PY: &str = "def add(a, b): return a + b";
const ADD_JAVA: &str = "int add(int a, int b) { return a + b; }";
const SUM_PY: &str = "def sum(a, b): return a + b";
const MULTIPLY_PY: &str = "def multiply(a, b): return a * b";
const DIVIDE_JAVA: &str = "int divide(int a, int b) { return a / b; }";
const UNRELATED: &str = "The quarterly report is due on Friday afternoon.";
const CLONE_MARGIN: f32 = 0.05;

fn scorer() -> SimilarityScorer {
    SimilarityScorer::load_default().expect("load default encoder")
}

#[test]
#[ignore = "downloads model weights"]
fn identity_symmetry_and_range() {
    let mut scorer = scorer();

    let same = scorer.similarity(ADD_JAVA, ADD_JAVA).unwrap();
    assert!((same - 1.0).abs() < 1e-5, "score was {same}");

    let ab = scorer.similarity(ADD_PY, DIVIDE_JAVA).unwrap();
    let ba = scorer.similarity(DIVIDE_JAVA, ADD_PY).unwrap();
    assert_eq!(ab, ba);
    assert!((-1.0..=1.0).contains(&ab));
}

#[test]
#[ignore = "downloads model weights"]
fn determinism_and_dimension() {
    let mut scorer = scorer();
    let first = scorer.embed(ADD_PY).unwrap();
    let second = scorer.embed(ADD_PY).unwrap();
    let other = scorer.embed(DIVIDE_JAVA).unwrap();

    for (x, y) in first.as_slice().iter().zip(second.as_slice()) {
        assert!((x - y).abs() < 1e-6);
    }
    assert_eq!(first.dim(), other.dim());
    assert_eq!(scorer.dimension(), Some(first.dim()));
}

#[test]
#[ignore = "downloads model weights"]
fn cross_language_clone_beats_unrelated_text() {
    let mut scorer = scorer();
    let clone = scorer.similarity(ADD_PY, ADD_JAVA).unwrap();
    let unrelated = scorer.similarity(ADD_PY, UNRELATED).unwrap();
    assert!(
        clone > unrelated + CLONE_MARGIN,
        "clone {clone} vs unrelated {unrelated}"
    );
}

#[test]
#[ignore = "downloads model weights"]
fn same_language_rename_scores_at_least_cross_language() {
    let mut scorer = scorer();
    let cross = scorer.similarity(ADD_PY, ADD_JAVA).unwrap();
    let renamed = scorer.similarity(ADD_PY, SUM_PY).unwrap();
    assert!(renamed >= cross, "renamed {renamed} vs cross {cross}");
}

#[test]
#[ignore = "downloads model weights"]
fn different_semantics_score_below_matching_pair() {
    let mut scorer = scorer();
    let matching = scorer.similarity(ADD_PY, ADD_JAVA).unwrap();
    let different = scorer.similarity(MULTIPLY_PY, DIVIDE_JAVA).unwrap();
    assert!(different < matching, "different {different} vs matching {matching}");
}
