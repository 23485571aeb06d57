//! Top reviews renderer
//!
//! Renders the place list to the "Top Rated Places" HTML fragment. The
//! visual treatment lives in an external stylesheet keyed by the class
//! names below; this module only owns the structure.

use crate::domain::entities::Place;

use super::html::{css_url, escape_attr, escape_text};

/// Class name of the section element
pub const CLASS_TOP_REVIEWS: &str = "top-reviews";

/// Class name of the section heading
pub const CLASS_SECTION_TITLE: &str = "section-title";

/// Class name of the card grid container
pub const CLASS_REVIEWS_GRID: &str = "reviews-grid";

/// Class name of one place card
pub const CLASS_PLACE_CARD: &str = "place-card";

/// Class name of the card heading
pub const CLASS_PLACE_NAME: &str = "place-name";

/// Class name of the star indicator
pub const CLASS_RATING: &str = "rating";

/// Class name of the description paragraph
pub const CLASS_DESCRIPTION: &str = "description";

/// Class name of the call-to-action button
pub const CLASS_REVIEW_BUTTON: &str = "review-button";

/// Section heading text
pub const SECTION_TITLE: &str = "Top Rated Places";

/// Call-to-action label. No behavior is wired to the button here.
pub const REVIEW_BUTTON_LABEL: &str = "Read Reviews";

/// Fixed dark overlay layered over every card image. Not configurable.
const CARD_OVERLAY: &str = "linear-gradient(rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.5))";

/// Render the top-rated places section.
///
/// One card per place, input order preserved. An empty slice renders the
/// section and heading over an empty grid.
pub fn render_top_reviews(places: &[Place]) -> String {
    tracing::debug!(places = places.len(), "rendering top reviews section");

    let mut buf = String::new();

    buf.push_str(&format!("<section class=\"{}\">\n", CLASS_TOP_REVIEWS));
    buf.push_str(&format!(
        "  <h2 class=\"{}\">{}</h2>\n",
        CLASS_SECTION_TITLE, SECTION_TITLE
    ));
    buf.push_str(&format!("  <div class=\"{}\">\n", CLASS_REVIEWS_GRID));

    for place in places {
        buf.push_str(&render_place_card(place));
    }

    buf.push_str("  </div>\n");
    buf.push_str("</section>\n");

    buf
}

fn render_place_card(place: &Place) -> String {
    let background = format!("{}, {}", CARD_OVERLAY, css_url(&place.image));

    let mut buf = String::new();

    buf.push_str(&format!(
        "    <div class=\"{}\" data-place-id=\"{}\" style=\"background-image: {}\">\n",
        CLASS_PLACE_CARD,
        place.id,
        escape_attr(&background)
    ));
    buf.push_str(&format!(
        "      <h3 class=\"{}\">{}</h3>\n",
        CLASS_PLACE_NAME,
        escape_text(&place.name)
    ));
    buf.push_str(&format!(
        "      <div class=\"{}\">{}</div>\n",
        CLASS_RATING,
        place.stars()
    ));
    buf.push_str(&format!(
        "      <p class=\"{}\">{}</p>\n",
        CLASS_DESCRIPTION,
        escape_text(&place.description)
    ));
    buf.push_str(&format!(
        "      <button class=\"{}\">{}</button>\n",
        CLASS_REVIEW_BUTTON, REVIEW_BUTTON_LABEL
    ));
    buf.push_str("    </div>\n");

    buf
}
