//! Distance metrics for document vector similarity.

use serde::{Deserialize, Serialize};

use crate::error::{RankerError, Result};

/// Distance metrics for vector similarity calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Cosine distance (1 - cosine similarity)
    #[default]
    Cosine,
    /// Angular distance
    Angular,
}

impl DistanceMetric {
    /// Calculate the distance between two vectors using this metric.
    ///
    /// Components are stored as `f32` but accumulated in `f64`.
    pub fn distance(&self, a: &[f32], b: &[f32]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(RankerError::analysis(format!(
                "Vector dimensions must match for distance calculation: {} != {}",
                a.len(),
                b.len()
            )));
        }

        let dot_product: f64 = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| f64::from(*x) * f64::from(*y))
            .sum();
        let norm_a = squared_norm(a).sqrt();
        let norm_b = squared_norm(b).sqrt();

        let result = match self {
            DistanceMetric::Cosine => {
                if norm_a == 0.0 || norm_b == 0.0 {
                    1.0 // Maximum distance for zero vectors
                } else {
                    1.0 - (dot_product / (norm_a * norm_b))
                }
            }
            DistanceMetric::Angular => {
                if norm_a == 0.0 || norm_b == 0.0 {
                    std::f64::consts::PI
                } else {
                    let cosine = (dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0);
                    cosine.acos()
                }
            }
        };

        Ok(result)
    }

    /// Calculate similarity (0-1, higher is more similar) between two vectors.
    ///
    /// A zero vector on either side has similarity 0.
    pub fn similarity(&self, a: &[f32], b: &[f32]) -> Result<f64> {
        let distance = self.distance(a, b)?;

        let similarity = match self {
            DistanceMetric::Cosine => 1.0 - distance,
            DistanceMetric::Angular => 1.0 - (distance / std::f64::consts::PI),
        };

        Ok(similarity.clamp(0.0, 1.0))
    }
}

fn squared_norm(v: &[f32]) -> f64 {
    v.iter().map(|x| f64::from(*x) * f64::from(*x)).sum()
}
