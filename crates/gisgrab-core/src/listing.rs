//! The listing record produced by a collection run.

use serde::Serialize;

/// Sentinel for a field whose extraction was attempted but produced nothing.
pub const UNKNOWN: &str = "unknown";

/// Sentinel for a listing confirmed to carry no rating widget at all.
///
/// Distinct from [`UNKNOWN`]: this means "field confirmed not present",
/// not "extraction failed".
pub const NO_RATING: &str = "no rating";

/// One collected business listing.
///
/// Every field is always populated — failed extraction yields [`UNKNOWN`]
/// (or [`NO_RATING`] for the rating field), never an absent value, so the
/// column set is identical across all records of a run. Field declaration
/// order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub name: String,
    pub address: String,
    pub website: String,
    pub phone: String,
    /// Canonical detail-page URL (query string stripped).
    pub link: String,
    pub rating: String,
    pub hours: String,
}

/// Strips the query string from a detail-page URL.
///
/// Records store the canonical link; navigation still uses the original URL
/// because its query parameters may carry routing state the page needs to
/// render.
#[must_use]
pub fn canonical_link(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_link_strips_query() {
        assert_eq!(
            canonical_link("https://2gis.ru/moscow/firm/123?m=37.6%2C55.7"),
            "https://2gis.ru/moscow/firm/123"
        );
    }

    #[test]
    fn canonical_link_passes_through_without_query() {
        assert_eq!(
            canonical_link("https://2gis.ru/moscow/firm/123"),
            "https://2gis.ru/moscow/firm/123"
        );
    }

    #[test]
    fn listing_serializes_fields_in_column_order() {
        let listing = Listing {
            name: "Кафе Пушкинъ".to_owned(),
            address: "Тверской бульвар, 26а".to_owned(),
            website: UNKNOWN.to_owned(),
            phone: "+7 495 739-00-33".to_owned(),
            link: "https://2gis.ru/moscow/firm/1".to_owned(),
            rating: "4.6 (2 341 оценка)".to_owned(),
            hours: "Открыто до 00:00".to_owned(),
        };
        let json = serde_json::to_string(&listing).unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let hours_pos = json.find("\"hours\"").unwrap();
        assert!(name_pos < hours_pos);
    }
}
