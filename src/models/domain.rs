use serde::{Deserialize, Serialize};

/// Property ad as loaded by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub property_type: String,
    pub price: i64,
    pub rooms: f64,
    #[serde(default)]
    pub has_parking: bool,
    #[serde(default)]
    pub has_elevator: bool,
    #[serde(default)]
    pub has_balcony: bool,
    #[serde(default)]
    pub has_garden: bool,
    #[serde(default)]
    pub pets_allowed: bool,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Listing {
    /// Listing with the scored fields set and every amenity off
    pub fn new(property_type: impl Into<String>, price: i64, rooms: f64) -> Self {
        Self {
            id: None,
            property_type: property_type.into(),
            price,
            rooms,
            has_parking: false,
            has_elevator: false,
            has_balcony: false,
            has_garden: false,
            pets_allowed: false,
            accessibility: false,
            ad_type: None,
            address: None,
            size: None,
            floor: None,
            latitude: None,
            longitude: None,
            description: None,
        }
    }
}

/// A user's saved search criteria
///
/// Every field is optional; a missing or malformed criterion simply awards
/// nothing. `features` holds the JSON array exactly as it is stored, e.g.
/// `["parking", "balcony"]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default, alias = "houseType")]
    pub house_type: Option<String>,
    #[serde(default, alias = "budgetMin")]
    pub budget_min: Option<i64>,
    #[serde(default, alias = "budgetMax")]
    pub budget_max: Option<i64>,
    #[serde(default)]
    pub rooms: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
}

/// Listing as returned to the client
///
/// `score` and `stars` are only present when the caller had preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<f64>,
}

impl ScoredListing {
    pub fn unscored(listing: Listing) -> Self {
        Self {
            listing,
            score: None,
            stars: None,
        }
    }
}

/// Points awarded per criterion
///
/// `feature_miss` is subtracted for each requested amenity the listing lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub property_type: i64,
    pub budget: i64,
    pub rooms: i64,
    pub feature_match: i64,
    pub feature_miss: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            property_type: 15,
            budget: 20,
            rooms: 10,
            feature_match: 5,
            feature_miss: 2,
        }
    }
}
