//! Place domain entity
//!
//! Represents a venue displayed in the top-rated places grid.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::rating::StarRating;

/// Unique identifier for a place
///
/// Used only as a rendering key; the value is never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceId(pub i64);

impl From<i64> for PlaceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A venue shown in the review grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    /// Score in the 0-5 range. Not checked here; the star indicator clamps.
    pub rating: f64,
    pub description: String,
    /// Background image source (URL or path). Never fetched.
    pub image: String,
}

impl Place {
    /// Star indicator for this place's score
    pub fn stars(&self) -> StarRating {
        StarRating::from_score(self.rating)
    }

    /// Check a record assembled from untrusted input.
    ///
    /// The renderer never calls this; out-of-range scores are clamped at
    /// render time. Callers that want to reject bad records instead of
    /// displaying them do it here.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "place {} has an empty name",
                self.id
            )));
        }
        if !self.rating.is_finite() {
            return Err(DomainError::Validation(format!(
                "rating for place {} is not finite",
                self.id
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(DomainError::Validation(format!(
                "rating {} for place {} is outside 0-5",
                self.rating, self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_place(rating: f64) -> Place {
        Place {
            id: PlaceId(7),
            name: "Harbor House".to_string(),
            rating,
            description: "Quiet waterfront spot with a long oyster list.".to_string(),
            image: "/images/places/harbor-house.jpg".to_string(),
        }
    }

    #[test]
    fn stars_follow_rating() {
        let place = make_place(4.4);
        assert_eq!(place.stars().filled(), 4);
        assert_eq!(place.stars().empty(), 1);
    }

    #[test]
    fn validate_accepts_in_range_rating() {
        assert!(make_place(0.0).validate().is_ok());
        assert!(make_place(4.4).validate().is_ok());
        assert!(make_place(5.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut place = make_place(4.4);
        place.name = "   ".to_string();
        assert!(place.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        assert!(make_place(-0.1).validate().is_err());
        assert!(make_place(5.1).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_rating() {
        assert!(make_place(f64::NAN).validate().is_err());
        assert!(make_place(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn place_id_display() {
        assert_eq!(PlaceId(42).to_string(), "42");
    }

    #[test]
    fn place_deserializes_from_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "Harbor House",
            "rating": 4.4,
            "description": "Quiet waterfront spot with a long oyster list.",
            "image": "/images/places/harbor-house.jpg"
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.id, PlaceId(7));
        assert_eq!(place.name, "Harbor House");
        assert_eq!(place.rating, 4.4);
    }
}
