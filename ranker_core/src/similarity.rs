//! Scoring factors for a single document
//!
//! With only one document there's no collection to measure term rarity
//! against, so inverse document frequency is left out entirely.


/// tf(term_frequency) = sqrt(term_frequency)
#[inline]
pub fn tf(term_frequency: u32) -> f64 {
    (term_frequency as f64).sqrt()
}


/// length_norm(length) = 1.0 / sqrt(max(1, length))
#[inline]
pub fn length_norm(length: u32) -> f64 {
    1.0f64 / (length.max(1) as f64).sqrt()
}


/// coord(matched, total) = matched / total
#[inline]
pub fn coord(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0f64;
    }

    matched as f64 / total as f64
}


#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityModel;


impl SimilarityModel {
    /// Contribution of a single matched query leaf
    #[inline]
    pub fn term_score(&self, term_frequency: u32, boost: f64) -> f64 {
        tf(term_frequency) * boost
    }

    /// Combines the leaf contributions into the document score
    pub fn score(&self, term_scores_sum: f64, matched: usize, total: usize, length: u32) -> f64 {
        coord(matched, total) * length_norm(length) * term_scores_sum
    }
}
