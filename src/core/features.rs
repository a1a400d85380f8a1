use crate::models::Listing;
use serde_json::Value;

/// Amenities a user can ask for, each backed by one listing flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Parking,
    Elevator,
    Balcony,
    Garden,
    PetsAllowed,
    Accessibility,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Parking,
        Feature::Elevator,
        Feature::Balcony,
        Feature::Garden,
        Feature::PetsAllowed,
        Feature::Accessibility,
    ];

    /// Name used in stored preferences
    pub fn name(self) -> &'static str {
        match self {
            Feature::Parking => "parking",
            Feature::Elevator => "elevator",
            Feature::Balcony => "balcony",
            Feature::Garden => "garden",
            Feature::PetsAllowed => "pets_allowed",
            Feature::Accessibility => "accessibility",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_name(name: &str) -> Option<Feature> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Whether the listing offers this amenity
    #[inline]
    pub fn is_present(self, listing: &Listing) -> bool {
        match self {
            Feature::Parking => listing.has_parking,
            Feature::Elevator => listing.has_elevator,
            Feature::Balcony => listing.has_balcony,
            Feature::Garden => listing.has_garden,
            Feature::PetsAllowed => listing.pets_allowed,
            Feature::Accessibility => listing.accessibility,
        }
    }
}

/// Parse the stored JSON feature list
///
/// Anything that is not a JSON array yields no features. Non-string items and
/// unknown names are skipped; repeated names are kept and each one counts.
pub fn parse_requested_features(raw: Option<&str>) -> Vec<Feature> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Vec::new(),
    };

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            tracing::debug!("Ignoring non-array feature preferences: {}", other);
            return Vec::new();
        }
        Err(e) => {
            tracing::debug!("Ignoring malformed feature preferences {:?}: {}", raw, e);
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(Feature::from_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_covers_table() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_name(feature.name()), Some(feature));
        }
        assert_eq!(Feature::from_name("Parking"), None);
        assert_eq!(Feature::from_name("pool"), None);
    }

    #[test]
    fn test_is_present_reads_matching_flag() {
        let mut listing = Listing::new("apartment", 1000, 3.0);
        listing.pets_allowed = true;

        assert!(Feature::PetsAllowed.is_present(&listing));
        assert!(!Feature::Parking.is_present(&listing));
        assert!(!Feature::Accessibility.is_present(&listing));
    }

    #[test]
    fn test_parse_valid_list() {
        let features = parse_requested_features(Some(r#"["parking", "garden"]"#));
        assert_eq!(features, vec![Feature::Parking, Feature::Garden]);
    }

    #[test]
    fn test_parse_skips_unknown_and_non_strings() {
        let features = parse_requested_features(Some(r#"["pool", 3, null, "balcony"]"#));
        assert_eq!(features, vec![Feature::Balcony]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let features = parse_requested_features(Some(r#"["elevator", "elevator"]"#));
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_parse_fails_soft() {
        assert!(parse_requested_features(None).is_empty());
        assert!(parse_requested_features(Some("")).is_empty());
        assert!(parse_requested_features(Some("[]")).is_empty());
        assert!(parse_requested_features(Some("not json")).is_empty());
        assert!(parse_requested_features(Some(r#"["parking""#)).is_empty());
        assert!(parse_requested_features(Some(r#"{"parking": true}"#)).is_empty());
        assert!(parse_requested_features(Some(r#""parking""#)).is_empty());
    }
}
