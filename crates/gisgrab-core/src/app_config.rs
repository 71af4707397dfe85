use std::path::PathBuf;
use std::time::Duration;

/// Run-invariant tuning for a collection run.
///
/// The search query and city vary per invocation and are CLI arguments, not
/// part of this struct. The debounce threshold and settle pauses are
/// empirical tuning for 2GIS's load behavior; their defaults match the
/// values that were observed to work, but none of them is semantically
/// load-bearing.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the target site, e.g. `https://2gis.ru`.
    pub base_url: String,
    /// Where the CSV lands. Only written when at least one record was collected.
    pub output_path: PathBuf,
    /// Consecutive no-growth scroll cycles required before the list is
    /// considered fully loaded.
    pub stable_cycles: u32,
    /// Pause after each scroll command, letting lazy content load.
    pub scroll_settle: Duration,
    /// Pause after a detail page's ready signal, letting secondary widgets
    /// (rating, hours) finish rendering.
    pub detail_settle: Duration,
    /// Bounded wait for the scrollable result panel to appear.
    pub panel_wait: Duration,
    /// Bounded wait for the first result card to become visible.
    pub list_wait: Duration,
    /// Bounded wait for a detail page's primary heading.
    pub detail_wait: Duration,
    /// User agent presented by the browser session.
    pub user_agent: String,
    /// Run the browser without a visible window.
    pub headless: bool,
}
