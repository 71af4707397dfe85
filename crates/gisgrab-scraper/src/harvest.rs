//! Scroll-driven harvesting of detail-page links from the virtualized
//! result list.
//!
//! The list renders only a window of cards at a time, so completion cannot
//! be detected by a fixed count. Instead the loop scrolls the panel to its
//! maximum extent, pauses for lazy content, and watches the candidate-link
//! count: after `stable_cycles` consecutive cycles without growth the list
//! is treated as fully loaded. A single stalled batch load is
//! indistinguishable from "no more data" for one cycle, which is exactly
//! what the debounce absorbs.

use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

use gisgrab_core::AppConfig;

use crate::error::ScrapeError;

/// Browser-side view of the search result list.
///
/// [`crate::BrowserSession`] implements this over a live tab; tests drive
/// the harvest loop with scripted fakes.
pub trait SearchPage {
    /// Bounded wait for the first result card to become visible.
    fn wait_for_list(&mut self, timeout: Duration) -> Result<(), ScrapeError>;

    /// Bounded wait for the scrollable list panel to be present.
    fn wait_for_panel(&mut self, timeout: Duration) -> Result<(), ScrapeError>;

    /// Number of candidate link elements currently in the DOM.
    fn candidate_count(&mut self) -> Result<usize, ScrapeError>;

    /// Command the panel to scroll to its maximum extent.
    fn scroll_to_bottom(&mut self) -> Result<(), ScrapeError>;

    /// `href` values of every candidate link currently in the DOM.
    fn candidate_links(&mut self) -> Result<Vec<String>, ScrapeError>;
}

/// Scrolls the result list to exhaustion and returns the deduplicated,
/// lexicographically sorted detail-page URLs.
///
/// Failure to confirm the list or locate the panel is terminal for this
/// stage, not for the run: the failure is logged and an empty set is
/// returned, which the pipeline treats as "nothing to collect".
pub fn harvest(page: &mut impl SearchPage, config: &AppConfig) -> Vec<String> {
    match try_harvest(page, config) {
        Ok(urls) => urls,
        Err(err) => {
            tracing::warn!(error = %err, "harvest failed; treating as empty result");
            Vec::new()
        }
    }
}

fn try_harvest(page: &mut impl SearchPage, config: &AppConfig) -> Result<Vec<String>, ScrapeError> {
    page.wait_for_list(config.list_wait)?;
    page.wait_for_panel(config.panel_wait)?;

    let mut last_count = 0usize;
    let mut stable = 0u32;
    while stable < config.stable_cycles {
        let current = page.candidate_count()?;
        if current > last_count {
            stable = 0;
        } else {
            stable += 1;
            tracing::debug!(count = current, stable, "no new links this cycle");
        }
        last_count = current;

        page.scroll_to_bottom()?;
        thread::sleep(config.scroll_settle);
    }
    tracing::info!(count = last_count, "finished scrolling result list");

    let unique: BTreeSet<String> = page
        .candidate_links()?
        .into_iter()
        .filter(|href| !href.is_empty())
        .collect();

    if unique.is_empty() {
        tracing::warn!("no detail-page links found after scrolling");
    }
    Ok(unique.into_iter().collect())
}

#[cfg(test)]
#[path = "harvest_test.rs"]
mod tests;
