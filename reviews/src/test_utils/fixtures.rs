//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{Place, PlaceId};

/// Create a test place with default values
pub fn test_place() -> Place {
    Place {
        id: PlaceId(1),
        name: "Harbor House".to_string(),
        rating: 4.4,
        description: "Quiet waterfront spot with a long oyster list.".to_string(),
        image: "/images/places/harbor-house.jpg".to_string(),
    }
}

/// Create a test place with a specific id and name
pub fn test_place_named(id: i64, name: &str) -> Place {
    Place {
        id: PlaceId(id),
        name: name.to_string(),
        rating: 4.0,
        description: format!("{} serves the neighborhood classics.", name),
        image: format!(
            "/images/places/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        ),
    }
}

/// Create a test place with a specific rating
pub fn test_place_with_rating(rating: f64) -> Place {
    Place {
        id: PlaceId(1),
        name: format!("place-rated-{}", rating),
        rating,
        description: "A place used to exercise the star indicator.".to_string(),
        image: "/images/places/rated.jpg".to_string(),
    }
}
