use std::collections::HashMap;
use std::time::Duration;

use gisgrab_core::UNKNOWN;

use super::*;

/// Maps a URL to either rendered markup or a scripted failure.
struct FakeDetailPage {
    pages: HashMap<String, Result<String, ()>>,
    visited: Vec<String>,
}

impl FakeDetailPage {
    fn new() -> Self {
        Self {
            pages: HashMap::new(),
            visited: Vec::new(),
        }
    }

    fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_owned(), Ok(html.to_owned()));
        self
    }

    fn failing(mut self, url: &str) -> Self {
        self.pages.insert(url.to_owned(), Err(()));
        self
    }
}

impl DetailPage for FakeDetailPage {
    fn fetch_rendered(&mut self, url: &str) -> Result<String, ScrapeError> {
        self.visited.push(url.to_owned());
        match self.pages.get(url) {
            Some(Ok(html)) => Ok(html.clone()),
            _ => Err(ScrapeError::timeout("h1", Duration::from_secs(1))),
        }
    }
}

fn detail_html(name: &str) -> String {
    format!("<html><body><h1>{name}</h1></body></html>")
}

#[test]
fn collects_one_record_per_loadable_page_in_order() {
    let urls = vec![
        "https://2gis.ru/moscow/firm/1?m=37".to_owned(),
        "https://2gis.ru/moscow/firm/2".to_owned(),
        "https://2gis.ru/moscow/firm/3".to_owned(),
    ];
    let mut page = FakeDetailPage::new()
        .page("https://2gis.ru/moscow/firm/1?m=37", &detail_html("Первый"))
        .failing("https://2gis.ru/moscow/firm/2")
        .page("https://2gis.ru/moscow/firm/3", &detail_html("Третий"));

    let listings = collect(&mut page, &urls);

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].name, "Первый");
    assert_eq!(listings[1].name, "Третий");
    // all three were attempted, in harvested order
    assert_eq!(page.visited, urls);
}

#[test]
fn record_link_is_the_canonical_url_but_navigation_uses_the_original() {
    let urls = vec!["https://2gis.ru/moscow/firm/1?m=37.6%2C55.7".to_owned()];
    let mut page = FakeDetailPage::new().page(
        "https://2gis.ru/moscow/firm/1?m=37.6%2C55.7",
        &detail_html("Имя"),
    );

    let listings = collect(&mut page, &urls);

    assert_eq!(listings[0].link, "https://2gis.ru/moscow/firm/1");
    assert_eq!(page.visited[0], "https://2gis.ru/moscow/firm/1?m=37.6%2C55.7");
}

#[test]
fn fields_missing_from_markup_resolve_to_sentinels() {
    let urls = vec!["https://2gis.ru/moscow/firm/1".to_owned()];
    let mut page =
        FakeDetailPage::new().page("https://2gis.ru/moscow/firm/1", &detail_html("Имя"));

    let listings = collect(&mut page, &urls);

    let listing = &listings[0];
    assert_eq!(listing.name, "Имя");
    assert_eq!(listing.address, UNKNOWN);
    assert_eq!(listing.website, UNKNOWN);
    assert_eq!(listing.phone, UNKNOWN);
    assert_eq!(listing.rating, gisgrab_core::NO_RATING);
    assert_eq!(listing.hours, UNKNOWN);
}

#[test]
fn all_failures_yield_an_empty_batch_without_aborting() {
    let urls = vec![
        "https://2gis.ru/moscow/firm/1".to_owned(),
        "https://2gis.ru/moscow/firm/2".to_owned(),
    ];
    let mut page = FakeDetailPage::new()
        .failing("https://2gis.ru/moscow/firm/1")
        .failing("https://2gis.ru/moscow/firm/2");

    let listings = collect(&mut page, &urls);

    assert!(listings.is_empty());
    assert_eq!(page.visited.len(), 2);
}
