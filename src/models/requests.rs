use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{Listing, PreferenceSet};

/// Largest result page the endpoint will score in one request
pub const MAX_LISTINGS_PER_REQUEST: usize = 1000;

/// Request to score a page of listings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreListingsRequest {
    #[validate(custom(function = "validate_page_size"))]
    #[serde(default)]
    pub listings: Vec<Listing>,
    /// Saved preferences of the caller, absent for anonymous requests
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
    /// Return best matches first instead of input order
    #[serde(default)]
    pub sort: bool,
}

fn validate_page_size(listings: &[Listing]) -> Result<(), ValidationError> {
    if listings.len() > MAX_LISTINGS_PER_REQUEST {
        let mut err = ValidationError::new("length");
        err.add_param("max".into(), &MAX_LISTINGS_PER_REQUEST);
        err.add_param("value".into(), &listings.len());
        return Err(err);
    }
    Ok(())
}
