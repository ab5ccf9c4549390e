// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vector math for comparing embeddings.

use crate::errors::ScoreError;

/// Norms below this are treated as zero vectors.
const ZERO_NORM_EPSILON: f64 = 1e-12;

/// Computes cosine similarity between two vectors of equal length.
///
/// Accumulates in f64 and clamps the result to [-1.0, 1.0]. A zero vector
/// (including an empty one) has no direction, so its similarity to anything
/// is 0.0. Swapping the arguments yields the bit-identical score.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ScoreError> {
    if a.len() != b.len() {
        return Err(ScoreError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let x = x as f64;
        let y = y as f64;
        dot = x.mul_add(y, dot);
        norm_a = x.mul_add(x, norm_a);
        norm_b = y.mul_add(y, norm_b);
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < ZERO_NORM_EPSILON {
        return Ok(0.0);
    }

    Ok((dot / denom).clamp(-1.0, 1.0) as f32)
}

/// L2-normalizes a vector in place. Zero vectors are left untouched.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for value in vector.iter_mut() {
        *value /= norm;
    }
}
