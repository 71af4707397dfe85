//! Wires the run together: browser session, harvest, collect, export.

use gisgrab_core::AppConfig;
use gisgrab_scraper::{collect, harvest, BrowserSession, DetailPage, SearchPage};

use crate::export;

/// Executes one full collection run.
///
/// The browser session is scoped to this function: whatever happens in the
/// stages below, dropping the session on the way out releases the browser.
///
/// # Errors
///
/// Returns an error if the browser cannot be launched, the search page
/// cannot be opened, or the output file cannot be written. Empty harvests
/// and empty collections are reported outcomes, not errors.
pub fn run(config: &AppConfig, city: &str, query: &str) -> anyhow::Result<()> {
    let mut session = BrowserSession::launch(config)?;
    session.open_search(city, query)?;
    run_stages(&mut session, config)
}

/// Harvest-then-collect over any page implementation; separated from [`run`]
/// so the stage sequencing is testable without a live browser.
fn run_stages<P: SearchPage + DetailPage>(page: &mut P, config: &AppConfig) -> anyhow::Result<()> {
    let urls = harvest(page, config);
    if urls.is_empty() {
        tracing::info!("no listings found; nothing to collect");
        return Ok(());
    }
    tracing::info!(count = urls.len(), "unique listings to process");

    let listings = collect(page, &urls);
    let processed = listings.len();
    if export::save(&config.output_path, &listings)? {
        tracing::info!(
            found = urls.len(),
            processed,
            path = %config.output_path.display(),
            "results saved"
        );
    } else {
        tracing::info!(found = urls.len(), "no records collected; nothing to save");
    }
    Ok(())
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
