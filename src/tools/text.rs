//! Text matching tools

use serde::Serialize;

use crate::matching::{edit_distance, normalize, similarity};

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub text: String,
    pub normalized: String,
}

#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
    pub a: String,
    pub b: String,
    pub normalized_a: String,
    pub normalized_b: String,
    pub edit_distance: usize,
    pub similarity: f64,
}

pub fn normalize_text(text: &str) -> NormalizeResponse {
    NormalizeResponse {
        text: text.to_string(),
        normalized: normalize(text),
    }
}

/// Compare two names the way the exercise resolver does
pub fn text_similarity(a: &str, b: &str) -> SimilarityResponse {
    let normalized_a = normalize(a);
    let normalized_b = normalize(b);
    SimilarityResponse {
        a: a.to_string(),
        b: b.to_string(),
        edit_distance: edit_distance(&normalized_a, &normalized_b),
        similarity: similarity(&normalized_a, &normalized_b),
        normalized_a,
        normalized_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_similarity_normalizes_first() {
        let response = text_similarity("CAFÉ", "cafe");
        assert_eq!(response.edit_distance, 0);
        assert_eq!(response.similarity, 1.0);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Pâté").normalized, "pate");
    }
}
