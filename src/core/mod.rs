// Core algorithm exports
pub mod features;
pub mod scorer;
pub mod scoring;

pub use features::{parse_requested_features, Feature};
pub use scorer::{ListingScorer, DEFAULT_PARALLEL_THRESHOLD};
pub use scoring::{calculate_star_rating, score_apartment, score_breakdown, ScoreBreakdown, DEFAULT_MAX_SCORE};
