//! Document vectors for semantic similarity.
//!
//! [`TextEmbedder`] turns raw text into a dense [`Vector`]. The built-in
//! [`HashingEmbedder`] uses the feature-hashing trick over lemma unigrams and
//! bigrams: no vocabulary or model file is needed, and bigrams keep some of
//! the word order that the keyword bag discards.

use std::sync::Arc;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::{RankerError, Result};

/// A dense vector representation of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// The vector dimensions as floating point values.
    pub data: Vec<f32>,
}

impl Vector {
    /// Create a new vector with the given dimensions.
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Create a zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self::new(vec![0.0; dimension])
    }

    /// Get the dimensionality of this vector.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Calculate the L2 norm (magnitude) of this vector.
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Whether every component is zero, i.e. the text had no representation.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| *x == 0.0)
    }

    /// Normalize this vector to unit length.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for value in &mut self.data {
                *value /= norm;
            }
        }
    }
}

/// Trait for converting text to vector embeddings.
pub trait TextEmbedder: Send + Sync {
    /// Generate an embedding vector for the given text.
    fn embed(&self, text: &str) -> Result<Vector>;

    /// Get the dimension of generated embeddings.
    fn dimension(&self) -> usize;

    /// Get the name/identifier of this embedder.
    fn name(&self) -> &str {
        "unknown"
    }
}

// Fixed seeds keep vectors identical across calls within a process.
const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Feature-hashing embedder over analyzed lemmas.
///
/// Each unigram adds `±1` and each adjacent pair adds `±bigram_weight` to a
/// bucket chosen by hashing the feature; the sign also comes from the hash
/// so collisions tend to cancel out. The result is L2-normalized.
pub struct HashingEmbedder {
    analyzer: Arc<dyn Analyzer>,
    dimension: usize,
    bigram_weight: f32,
    hasher: RandomState,
}

impl HashingEmbedder {
    /// Create a new hashing embedder.
    pub fn new(analyzer: Arc<dyn Analyzer>, dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(RankerError::invalid_config(
                "embedding dimension must be greater than zero",
            ));
        }

        Ok(HashingEmbedder {
            analyzer,
            dimension,
            bigram_weight: 0.5,
            hasher: RandomState::with_seeds(HASH_SEEDS[0], HASH_SEEDS[1], HASH_SEEDS[2], HASH_SEEDS[3]),
        })
    }

    /// Set the weight of bigram features relative to unigrams.
    pub fn with_bigram_weight(mut self, weight: f32) -> Self {
        self.bigram_weight = weight.max(0.0);
        self
    }

    fn add_feature(&self, data: &mut [f32], feature: &str, weight: f32) {
        let hash = self.hasher.hash_one(feature);
        let bucket = (hash % self.dimension as u64) as usize;
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        data[bucket] += sign * weight;
    }
}

impl TextEmbedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vector> {
        let lemmas: Vec<String> = self.analyzer.analyze(text)?.map(|t| t.text).collect();
        let mut vector = Vector::zeros(self.dimension);

        for lemma in &lemmas {
            self.add_feature(&mut vector.data, lemma, 1.0);
        }

        if self.bigram_weight > 0.0 {
            for pair in lemmas.windows(2) {
                let bigram = format!("{} {}", pair[0], pair[1]);
                self.add_feature(&mut vector.data, &bigram, self.bigram_weight);
            }
        }

        vector.normalize();
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

impl std::fmt::Debug for HashingEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashingEmbedder")
            .field("analyzer", &self.analyzer.name())
            .field("dimension", &self.dimension)
            .field("bigram_weight", &self.bigram_weight)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::english::EnglishAnalyzer;

    fn embedder() -> HashingEmbedder {
        HashingEmbedder::new(Arc::new(EnglishAnalyzer::new()), 256).unwrap()
    }

    #[test]
    fn test_embedding_is_normalized() {
        let vector = embedder().embed("Rust developer building backend services").unwrap();

        assert_eq!(vector.dimension(), 256);
        assert!((vector.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_embedding_is_deterministic() {
        let embedder = embedder();
        let a = embedder.embed("distributed systems engineer").unwrap();
        let b = embedder.embed("distributed systems engineer").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_stop_words_only_yield_zero_vector() {
        let vector = embedder().embed("the and of with").unwrap();
        assert!(vector.is_zero());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(HashingEmbedder::new(Arc::new(EnglishAnalyzer::new()), 0).is_err());
    }

    #[test]
    fn test_vector_normalize() {
        let mut vector = Vector::new(vec![3.0, 4.0]);
        vector.normalize();

        assert!((vector.data[0] - 0.6).abs() < 1e-6);
        assert!((vector.data[1] - 0.8).abs() < 1e-6);
    }
}
