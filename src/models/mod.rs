// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Listing, PreferenceSet, ScoredListing, ScoringWeights};
pub use requests::ScoreListingsRequest;
pub use responses::{ErrorResponse, HealthResponse, ScoreListingsResponse};
