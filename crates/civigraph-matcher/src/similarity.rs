//! Cosine similarity scoring for embedding vectors
//!
//! Embeddings may be absent or corrupt for some entities, so the
//! similarity function never fails: malformed input degrades to a score
//! of zero instead of an error. The orchestrator converts the raw
//! similarity to an integer match percentage.

/// Cosine similarity between two embedding vectors, in [-1, 1]
///
/// Returns `0.0` when the vectors differ in length or either has zero
/// magnitude. Pure and symmetric: `cosine_similarity(a, b)` equals
/// `cosine_similarity(b, a)`.
///
/// # Examples
///
/// ```
/// use civigraph_matcher::cosine_similarity;
///
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]), 1.0);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
/// assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

/// Convert a similarity to an integer match percentage
///
/// `round(similarity * 100)`, so a similarity of 0.924 becomes 92.
/// Negative similarities produce negative scores; they never pass the
/// acceptance threshold.
pub fn match_score(similarity: f32) -> i32 {
    (similarity * 100.0).round() as i32
}
