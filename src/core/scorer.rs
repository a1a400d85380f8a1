use crate::core::scoring::{calculate_star_rating, score_breakdown, DEFAULT_MAX_SCORE};
use crate::models::{Listing, PreferenceSet, ScoredListing, ScoringWeights};
use rayon::prelude::*;

/// Result sets at least this large are scored on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Scores listing collections for a single caller
///
/// Preferences are resolved once per request by the caller; each listing is
/// then scored independently, so sequential and parallel runs give identical
/// output in input order.
#[derive(Debug, Clone)]
pub struct ListingScorer {
    weights: ScoringWeights,
    max_score: i64,
    parallel_threshold: usize,
}

impl ListingScorer {
    pub fn new(weights: ScoringWeights, max_score: i64) -> Self {
        Self {
            weights,
            max_score,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_MAX_SCORE)
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Raw score and star rating for one listing
    pub fn score(&self, listing: &Listing, preferences: &PreferenceSet) -> (i64, f64) {
        let score = score_breakdown(listing, preferences, &self.weights).total();
        (score, calculate_star_rating(score, self.max_score))
    }

    /// Attach `score`/`stars` to every listing, keeping input order
    ///
    /// Without preferences the listings are passed through unscored.
    pub fn score_listings(
        &self,
        preferences: Option<&PreferenceSet>,
        listings: Vec<Listing>,
    ) -> Vec<ScoredListing> {
        let Some(preferences) = preferences else {
            tracing::debug!("No preferences, returning {} listings unscored", listings.len());
            return listings.into_iter().map(ScoredListing::unscored).collect();
        };

        let attach = |listing: Listing| {
            let (score, stars) = self.score(&listing, preferences);
            ScoredListing {
                listing,
                score: Some(score),
                stars: Some(stars),
            }
        };

        if listings.len() >= self.parallel_threshold {
            tracing::debug!("Scoring {} listings in parallel", listings.len());
            listings.into_par_iter().map(attach).collect()
        } else {
            listings.into_iter().map(attach).collect()
        }
    }

    /// Like `score_listings`, best score first
    ///
    /// The sort is stable, so ties and unscored listings keep input order.
    pub fn rank(
        &self,
        preferences: Option<&PreferenceSet>,
        listings: Vec<Listing>,
    ) -> Vec<ScoredListing> {
        let mut scored = self.score_listings(preferences, listings);
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

impl Default for ListingScorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
