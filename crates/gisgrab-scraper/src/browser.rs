//! Live browser session over Chrome DevTools.
//!
//! The session is the single shared mutable resource of a run: the pipeline
//! owns exactly one, drives it strictly sequentially, and releases it on
//! every exit path by RAII (dropping the session terminates the Chrome
//! process, unhandled errors included).

use std::ffi::{OsStr, OsString};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use gisgrab_core::AppConfig;
use headless_chrome::{Browser, LaunchOptions, Tab};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::collect::DetailPage;
use crate::error::ScrapeError;
use crate::harvest::SearchPage;
use crate::selectors;

/// Bytes percent-encoded in the search-query path segment: everything but
/// RFC 3986 unreserved characters.
const QUERY_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One Chrome process with a single tab, driving both harvesting and detail
/// collection.
pub struct BrowserSession {
    // Keeps the Chrome process alive; dropping it closes the browser.
    _browser: Browser,
    tab: Arc<Tab>,
    config: AppConfig,
}

impl BrowserSession {
    /// Launches Chrome with the configured user agent and a minimal set of
    /// fingerprint-masking arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Session`] if Chrome cannot be spawned or the
    /// initial tab cannot be opened.
    pub fn launch(config: &AppConfig) -> Result<Self, ScrapeError> {
        tracing::info!(headless = config.headless, "launching browser");
        let user_agent_arg = OsString::from(format!("--user-agent={}", config.user_agent));
        let args: Vec<&OsStr> = vec![
            OsStr::new("--start-maximized"),
            OsStr::new("--disable-infobars"),
            OsStr::new("--no-first-run"),
            OsStr::new("--no-default-browser-check"),
            user_agent_arg.as_os_str(),
        ];
        let browser = Browser::new(LaunchOptions {
            headless: config.headless,
            args,
            ..Default::default()
        })
        .map_err(|e| ScrapeError::session(&e))?;
        let tab = browser.new_tab().map_err(|e| ScrapeError::session(&e))?;
        Ok(Self {
            _browser: browser,
            tab,
            config: config.clone(),
        })
    }

    /// Navigates to the search page for `city` and `query` and lets the app
    /// shell settle before the list is probed.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Session`] on navigation failure.
    pub fn open_search(&mut self, city: &str, query: &str) -> Result<(), ScrapeError> {
        let url = search_url(&self.config.base_url, city, query);
        tracing::info!(url = %url, "opening search page");
        self.tab
            .navigate_to(&url)
            .and_then(Tab::wait_until_navigated)
            .map_err(|e| ScrapeError::session(&e))?;
        thread::sleep(self.config.scroll_settle);
        Ok(())
    }
}

/// Builds `<base>/<city>/search/<percent-encoded query>`.
#[must_use]
pub fn search_url(base_url: &str, city: &str, query: &str) -> String {
    let encoded = utf8_percent_encode(query, QUERY_SEGMENT);
    format!("{}/{city}/search/{encoded}", base_url.trim_end_matches('/'))
}

impl SearchPage for BrowserSession {
    fn wait_for_list(&mut self, timeout: Duration) -> Result<(), ScrapeError> {
        self.tab
            .wait_for_element_with_custom_timeout(selectors::CARD_LINK, timeout)
            .map(|_| ())
            .map_err(|_| ScrapeError::timeout(selectors::CARD_LINK, timeout))
    }

    fn wait_for_panel(&mut self, timeout: Duration) -> Result<(), ScrapeError> {
        self.tab
            .wait_for_element_with_custom_timeout(selectors::SCROLL_PANEL, timeout)
            .map(|_| ())
            .map_err(|_| ScrapeError::timeout(selectors::SCROLL_PANEL, timeout))
    }

    fn candidate_count(&mut self) -> Result<usize, ScrapeError> {
        // find_elements fails when the selector matches nothing; for the
        // growth counter that is simply a count of zero.
        Ok(self
            .tab
            .find_elements(selectors::CARD_LINK)
            .map(|els| els.len())
            .unwrap_or(0))
    }

    fn scroll_to_bottom(&mut self) -> Result<(), ScrapeError> {
        let panel = self
            .tab
            .find_element(selectors::SCROLL_PANEL)
            .map_err(|_| ScrapeError::PanelNotFound {
                selector: selectors::SCROLL_PANEL.to_owned(),
            })?;
        panel
            .call_js_fn(
                "function() { this.scrollTo(0, this.scrollHeight); }",
                Vec::new(),
                false,
            )
            .map_err(|e| ScrapeError::session(&e))?;
        Ok(())
    }

    fn candidate_links(&mut self) -> Result<Vec<String>, ScrapeError> {
        let Ok(elements) = self.tab.find_elements(selectors::CARD_LINK) else {
            return Ok(Vec::new());
        };
        let mut links = Vec::with_capacity(elements.len());
        for element in &elements {
            // `this.href` resolves relative card links against the page URL.
            let href = element
                .call_js_fn("function() { return this.href; }", Vec::new(), false)
                .map_err(|e| ScrapeError::session(&e))?
                .value
                .and_then(|v| v.as_str().map(str::to_owned));
            if let Some(href) = href {
                links.push(href);
            }
        }
        Ok(links)
    }
}

impl DetailPage for BrowserSession {
    fn fetch_rendered(&mut self, url: &str) -> Result<String, ScrapeError> {
        self.tab
            .navigate_to(url)
            .and_then(Tab::wait_until_navigated)
            .map_err(|e| ScrapeError::session(&e))?;
        self.tab
            .wait_for_element_with_custom_timeout(selectors::DETAIL_HEADER, self.config.detail_wait)
            .map_err(|_| ScrapeError::timeout(selectors::DETAIL_HEADER, self.config.detail_wait))?;
        // rating and hours widgets render after the heading
        thread::sleep(self.config.detail_settle);
        self.tab.get_content().map_err(|e| ScrapeError::session(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_non_ascii_query() {
        assert_eq!(
            search_url("https://2gis.ru", "moscow", "кафе"),
            "https://2gis.ru/moscow/search/%D0%BA%D0%B0%D1%84%D0%B5"
        );
    }

    #[test]
    fn search_url_encodes_spaces() {
        assert_eq!(
            search_url("https://2gis.ru", "spb", "sushi bar"),
            "https://2gis.ru/spb/search/sushi%20bar"
        );
    }

    #[test]
    fn search_url_trims_trailing_slash_on_base() {
        assert_eq!(
            search_url("https://2gis.ru/", "moscow", "pizza"),
            "https://2gis.ru/moscow/search/pizza"
        );
    }
}
