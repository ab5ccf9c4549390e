// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;

fn clonesim() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("clonesim");
    cmd.env("NO_COLOR", "1").env_remove("CLONESIM_MODEL");
    cmd
}

fn json_stdout(cmd: &mut assert_cmd::Command) -> Value {
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    serde_json::from_str(&stdout).expect("json output")
}

#[test]
fn embed_prints_normalized_vector() {
    let output = json_stdout(clonesim().args([
        "--model",
        "hash:64",
        "--format",
        "json",
        "embed",
        "fn main() { println!(\"hi\"); }",
    ]));

    assert_eq!(output["model"], "hash:64");
    assert_eq!(output["dimension"], 64);
    let values = output["embedding"].as_array().expect("embedding array");
    assert_eq!(values.len(), 64);

    let norm: f64 = values
        .iter()
        .map(|v| v.as_f64().expect("number").powi(2))
        .sum::<f64>()
        .sqrt();
    assert!((norm - 1.0).abs() < 1e-4, "norm was {norm}");
}

#[test]
fn embed_text_output_has_one_value_per_dimension() {
    let assert = clonesim()
        .args(["--model", "hash:16", "embed", "x + y"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert_eq!(stdout.split_whitespace().count(), 16);
}

#[test]
fn demo_scores_all_pairs() {
    clonesim()
        .args(["--model", "hash", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("same function, Python vs Java"))
        .stdout(predicate::str::contains("int divide(int a, int b)"))
        .stdout(predicate::str::contains("Similarity score:").count(4));
}

#[test]
fn demo_json_orders_pairs() {
    let output = json_stdout(clonesim().args(["--model", "hash", "--format", "json", "demo"]));
    assert_eq!(output["model"], "hash:384");

    let results = output["results"].as_array().expect("results");
    assert_eq!(results.len(), 4);
    let score = |idx: usize| results[idx]["score"].as_f64().expect("score");

    // Renamed function in the same language >= translated function > different operation.
    assert!(score(3) >= score(0));
    assert!(score(2) < score(0));
}

#[test]
fn models_lists_offline_and_builtin_encoders() {
    clonesim()
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default: jina-code"))
        .stdout(predicate::str::contains("hash"))
        .stdout(predicate::str::contains("Qdrant/all-MiniLM-L6-v2-onnx"))
        .stdout(predicate::str::contains("AllMiniLML6V2"));

    let output = json_stdout(clonesim().args(["--format", "json", "models"]));
    let models = output.as_array().expect("model list");
    assert_eq!(models[0]["code"], "hash");
    assert!(models.len() > 1);

    let mut names: Vec<&str> = models.iter().filter_map(|m| m["name"].as_str()).collect();
    let listed = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), listed);
    assert_eq!(listed, models.len());
}

#[test]
fn completions_are_generated() {
    clonesim()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clonesim"));
}
