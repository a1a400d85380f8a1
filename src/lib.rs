//! Estate Rank - listing scoring service for SmartEstate
//!
//! Compares property ads against a user's saved preferences and produces an
//! additive match score plus a 0-5 star rating for each ad.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_star_rating, score_apartment, ListingScorer, DEFAULT_MAX_SCORE};
pub use crate::models::{Listing, PreferenceSet, ScoredListing, ScoringWeights, ScoreListingsRequest, ScoreListingsResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let score = score_apartment(&Listing::new("house", 1, 1.0), &PreferenceSet::default());
        assert_eq!(score, 0);
        assert_eq!(calculate_star_rating(score, DEFAULT_MAX_SCORE), 0.0);
    }
}
