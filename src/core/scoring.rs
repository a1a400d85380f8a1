use crate::core::features::parse_requested_features;
use crate::models::{Listing, PreferenceSet, ScoringWeights};

/// Score at which a listing earns five stars
pub const DEFAULT_MAX_SCORE: i64 = 70;

/// House type alias stored by the questionnaire for detached houses
const PRIVATE_HOUSE_ALIAS: &str = "private_house";

/// Per-criterion contributions to a listing's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub property_type: i64,
    pub budget: i64,
    pub rooms: i64,
    pub features: i64,
}

impl ScoreBreakdown {
    /// Unclamped sum of all criteria; may be negative
    pub fn total(&self) -> i64 {
        self.property_type + self.budget + self.rooms + self.features
    }
}

/// Score a listing against preferences with the default weights
///
/// Scoring formula:
/// score = (
///     15 if house type matches +
///     20 if min <= price <= max +
///     10 if room count matches +
///     5 per requested amenity present, -2 per requested amenity missing
/// )
pub fn score_apartment(listing: &Listing, preferences: &PreferenceSet) -> i64 {
    score_breakdown(listing, preferences, &ScoringWeights::default()).total()
}

/// Evaluate every criterion separately
pub fn score_breakdown(
    listing: &Listing,
    preferences: &PreferenceSet,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let breakdown = ScoreBreakdown {
        property_type: if matches_property_type(preferences.house_type.as_deref(), &listing.property_type) {
            weights.property_type
        } else {
            0
        },
        budget: if within_budget(preferences.budget_min, preferences.budget_max, listing.price) {
            weights.budget
        } else {
            0
        },
        rooms: if matches_rooms(preferences.rooms.as_deref(), listing.rooms) {
            weights.rooms
        } else {
            0
        },
        features: feature_score(listing, preferences.features.as_deref(), weights),
    };

    tracing::debug!(
        property_type = breakdown.property_type,
        budget = breakdown.budget,
        rooms = breakdown.rooms,
        features = breakdown.features,
        total = breakdown.total(),
        "Scored listing {:?} ({}, price {}, rooms {})",
        listing.id,
        listing.property_type,
        listing.price,
        listing.rooms
    );

    breakdown
}

/// Map a raw score onto 0.0-5.0 stars with one decimal
///
/// Scores are clamped to [0, max_score] first, so anything above `max_score`
/// is five stars. Halves round away from zero.
pub fn calculate_star_rating(score: i64, max_score: i64) -> f64 {
    if max_score <= 0 {
        return 0.0;
    }

    let clamped = score.clamp(0, max_score);
    let normalized = clamped as f64 / max_score as f64;

    (normalized * 50.0).round() / 10.0
}

#[inline]
fn matches_property_type(house_type: Option<&str>, property_type: &str) -> bool {
    match house_type {
        Some(wanted) => {
            wanted == property_type || (wanted == PRIVATE_HOUSE_ALIAS && property_type == "house")
        }
        None => false,
    }
}

/// Both bounds are required; either one missing awards nothing
#[inline]
fn within_budget(min: Option<i64>, max: Option<i64>, price: i64) -> bool {
    match (min, max) {
        (Some(min), Some(max)) => min <= price && price <= max,
        _ => false,
    }
}

/// Exact float equality, e.g. "3" matches 3.0 but "3.0001" does not
#[inline]
fn matches_rooms(wanted: Option<&str>, rooms: f64) -> bool {
    let Some(wanted) = wanted.map(str::trim).filter(|w| !w.is_empty()) else {
        return false;
    };

    match wanted.parse::<f64>() {
        Ok(wanted) => wanted == rooms,
        Err(e) => {
            tracing::debug!("Ignoring unparsable rooms preference {:?}: {}", wanted, e);
            false
        }
    }
}

fn feature_score(listing: &Listing, raw_features: Option<&str>, weights: &ScoringWeights) -> i64 {
    parse_requested_features(raw_features)
        .into_iter()
        .map(|feature| {
            if feature.is_present(listing) {
                weights.feature_match
            } else {
                -weights.feature_miss
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_listing() -> Listing {
        let mut listing = Listing::new("house", 100, 3.0);
        listing.has_parking = true;
        listing.has_elevator = true;
        listing.has_balcony = true;
        listing.has_garden = true;
        listing.pets_allowed = true;
        listing
    }

    fn create_test_preferences() -> PreferenceSet {
        PreferenceSet {
            house_type: Some("private_house".to_string()),
            budget_min: Some(50),
            budget_max: Some(100),
            rooms: Some("3".to_string()),
            features: Some(r#"["parking", "balcony", "elevator", "garden"]"#.to_string()),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let score = score_apartment(&create_test_listing(), &create_test_preferences());
        assert_eq!(score, 65);
        assert_eq!(calculate_star_rating(score, DEFAULT_MAX_SCORE), 4.6);
    }

    #[test]
    fn test_breakdown_parts() {
        let breakdown = score_breakdown(
            &create_test_listing(),
            &create_test_preferences(),
            &ScoringWeights::default(),
        );

        assert_eq!(
            breakdown,
            ScoreBreakdown {
                property_type: 15,
                budget: 20,
                rooms: 10,
                features: 20,
            }
        );
        assert_eq!(breakdown.total(), 65);
    }

    #[test]
    fn test_property_type_match() {
        assert!(matches_property_type(Some("apartment"), "apartment"));
        assert!(matches_property_type(Some("private_house"), "house"));
        assert!(!matches_property_type(Some("house"), "private_house"));
        assert!(!matches_property_type(Some("private_house"), "apartment"));
        assert!(!matches_property_type(None, "house"));
    }

    #[test]
    fn test_budget_inclusive_bounds() {
        assert!(within_budget(Some(50), Some(100), 50));
        assert!(within_budget(Some(50), Some(100), 100));
        assert!(!within_budget(Some(50), Some(100), 101));
        assert!(!within_budget(Some(50), Some(100), 49));
        assert!(!within_budget(None, Some(100), 80));
        assert!(!within_budget(Some(50), None, 80));
        assert!(!within_budget(None, None, 80));
        assert!(!within_budget(Some(100), Some(50), 75));
    }

    #[test]
    fn test_rooms_exact_match() {
        assert!(matches_rooms(Some("3"), 3.0));
        assert!(matches_rooms(Some("3.5"), 3.5));
        assert!(matches_rooms(Some(" 4 "), 4.0));
        assert!(!matches_rooms(Some("3.5"), 3.0));
        assert!(!matches_rooms(Some(""), 0.0));
        assert!(!matches_rooms(Some("three"), 3.0));
        assert!(!matches_rooms(None, 3.0));
    }

    #[test]
    fn test_missing_features_penalized() {
        let listing = Listing::new("apartment", 500, 2.0);
        let preferences = PreferenceSet {
            features: Some(r#"["parking", "garden", "accessibility"]"#.to_string()),
            ..Default::default()
        };

        assert_eq!(score_apartment(&listing, &preferences), -6);
    }

    #[test]
    fn test_star_rating_boundaries() {
        assert_eq!(calculate_star_rating(0, DEFAULT_MAX_SCORE), 0.0);
        assert_eq!(calculate_star_rating(70, DEFAULT_MAX_SCORE), 5.0);
        assert_eq!(calculate_star_rating(-10, DEFAULT_MAX_SCORE), 0.0);
        assert_eq!(calculate_star_rating(100, DEFAULT_MAX_SCORE), 5.0);
        assert_eq!(calculate_star_rating(75, DEFAULT_MAX_SCORE), 5.0);
        assert_eq!(calculate_star_rating(35, DEFAULT_MAX_SCORE), 2.5);
        assert_eq!(calculate_star_rating(i64::MIN, DEFAULT_MAX_SCORE), 0.0);
        assert_eq!(calculate_star_rating(i64::MAX, DEFAULT_MAX_SCORE), 5.0);
    }

    #[test]
    fn test_star_rating_degenerate_max() {
        assert_eq!(calculate_star_rating(10, 0), 0.0);
        assert_eq!(calculate_star_rating(10, -5), 0.0);
    }

    #[test]
    fn test_star_rating_one_decimal() {
        for score in -5..=80 {
            let stars = calculate_star_rating(score, DEFAULT_MAX_SCORE);
            assert!((0.0..=5.0).contains(&stars));
            let tenths = stars * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9, "{} has more than one decimal", stars);
        }
    }
}
