//! Sequential detail-page collection over a harvested URL set.

use gisgrab_core::{canonical_link, Listing};
use scraper::Html;

use crate::error::ScrapeError;
use crate::extract::{extract_field, Field};

/// Browser-side view of a single detail page.
///
/// `fetch_rendered` navigates to the original URL (its query parameters may
/// carry routing state the page needs), waits — bounded — for the primary
/// heading as the ready signal, pauses for secondary widgets, and returns
/// the rendered markup.
pub trait DetailPage {
    fn fetch_rendered(&mut self, url: &str) -> Result<String, ScrapeError>;
}

/// Visits every harvested URL in order and returns one [`Listing`] per page
/// that rendered usably.
///
/// Per-item failures (timeout, navigation error) are logged with the
/// offending URL and skipped; a single bad listing never aborts the batch.
/// The run is one pass with no retries.
pub fn collect(page: &mut impl DetailPage, urls: &[String]) -> Vec<Listing> {
    let total = urls.len();
    let mut listings = Vec::with_capacity(total);

    for (i, url) in urls.iter().enumerate() {
        let link = canonical_link(url);
        tracing::info!(n = i + 1, total, url = %link, "opening listing");

        let html = match page.fetch_rendered(url) {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "failed to load listing; skipping");
                continue;
            }
        };

        let doc = Html::parse_document(&html);
        let listing = Listing {
            name: extract_field(&doc, Field::Name),
            address: extract_field(&doc, Field::Address),
            website: extract_field(&doc, Field::Website),
            phone: extract_field(&doc, Field::Phone),
            link,
            rating: extract_field(&doc, Field::Rating),
            hours: extract_field(&doc, Field::Hours),
        };
        tracing::info!(
            name = %listing.name,
            address = %listing.address,
            phone = %listing.phone,
            rating = %listing.rating,
            "collected listing"
        );
        listings.push(listing);
    }

    listings
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
