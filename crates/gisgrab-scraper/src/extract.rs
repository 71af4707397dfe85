//! Field extraction over rendered detail-page markup.
//!
//! Every field resolves through an ordered chain of [`Lookup`] strategies;
//! the first strategy producing a non-empty value wins. A chain that misses
//! entirely resolves to the [`UNKNOWN`] sentinel — a malformed or absent
//! sub-element never fails the whole record. Rating has its own composition
//! logic and a distinct [`NO_RATING`] sentinel (see [`extract_rating`]).

use gisgrab_core::{NO_RATING, UNKNOWN};
use scraper::{ElementRef, Html, Selector};

use crate::selectors;

/// Review-count text used when the rating block carries no count element.
const ZERO_RATINGS: &str = "0 ratings";

/// The fields extracted from a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Address,
    Website,
    Phone,
    Rating,
    Hours,
}

/// A single lookup strategy against a parsed document.
///
/// Strategies are ordered from most to least stable: `data-testid` role
/// markers survive markup revisions that rename every generated class, so
/// they always come first in a chain.
#[derive(Debug)]
enum Lookup {
    /// Trimmed text of the first element matching the selector.
    Text(&'static str),
    /// An attribute of the first element matching the selector.
    Attr(&'static str, &'static str),
    /// Trimmed text of `inner` within the first match of `outer`.
    NestedText {
        outer: &'static str,
        inner: &'static str,
    },
    /// `href` of the first anchor inside the contact row whose label element
    /// contains `label`. Used when the primary role marker is absent in some
    /// listing categories.
    LabeledLink {
        label: &'static str,
        label_class_prefix: &'static str,
        row_class_prefix: &'static str,
    },
}

impl Lookup {
    /// Runs the strategy. `None` covers every miss: no match, empty text,
    /// missing attribute, or an unparseable selector.
    fn try_extract(&self, doc: &Html) -> Option<String> {
        match self {
            Lookup::Text(selector) => select_first(doc, selector).map(text_of),
            Lookup::Attr(selector, attr) => select_first(doc, selector)
                .and_then(|el| el.value().attr(attr))
                .map(str::to_owned),
            Lookup::NestedText { outer, inner } => {
                let outer_el = select_first(doc, outer)?;
                let sel = Selector::parse(inner).ok()?;
                outer_el.select(&sel).next().map(text_of)
            }
            Lookup::LabeledLink {
                label,
                label_class_prefix,
                row_class_prefix,
            } => labeled_link(doc, label, label_class_prefix, row_class_prefix),
        }
        .filter(|value| !value.is_empty())
    }
}

const NAME_CHAIN: &[Lookup] = &[Lookup::Text(selectors::DETAIL_HEADER)];

const ADDRESS_CHAIN: &[Lookup] = &[Lookup::Text(selectors::ADDRESS_LINK)];

/// The `data-testid` marker is absent in some listing categories; the
/// labeled contact row is the fallback path.
const WEBSITE_CHAIN: &[Lookup] = &[
    Lookup::Attr(selectors::WEBSITE_LINK, "href"),
    Lookup::LabeledLink {
        label: selectors::WEBSITE_LABEL_TEXT,
        label_class_prefix: selectors::WEBSITE_LABEL_CLASS_PREFIX,
        row_class_prefix: selectors::CONTACT_ROW_CLASS_PREFIX,
    },
];

const PHONE_CHAIN: &[Lookup] = &[Lookup::NestedText {
    outer: selectors::PHONE_LINK,
    inner: selectors::PHONE_NUMBER,
}];

const HOURS_CHAIN: &[Lookup] = &[Lookup::Text(selectors::HOURS_STATUS)];

/// Extracts one field from a parsed detail page, resolving to a sentinel on
/// any miss. Never fails.
#[must_use]
pub fn extract_field(doc: &Html, field: Field) -> String {
    let chain: &[Lookup] = match field {
        Field::Name => NAME_CHAIN,
        Field::Address => ADDRESS_CHAIN,
        Field::Website => WEBSITE_CHAIN,
        Field::Phone => PHONE_CHAIN,
        Field::Hours => HOURS_CHAIN,
        Field::Rating => return extract_rating(doc),
    };

    chain
        .iter()
        .find_map(|lookup| lookup.try_extract(doc))
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

/// Composes `"<value> (<count>)"` from the rating block.
///
/// An absent container means the listing is confirmed to have no rating and
/// yields [`NO_RATING`] — distinct from [`UNKNOWN`], which would signal a
/// failed extraction. A container whose value child is missing also yields
/// [`NO_RATING`]; a missing count child alone defaults to [`ZERO_RATINGS`].
fn extract_rating(doc: &Html) -> String {
    let Some(container) = select_first(doc, selectors::RATING_CONTAINER) else {
        return NO_RATING.to_owned();
    };

    let Some(value) = select_in(container, selectors::RATING_VALUE)
        .map(text_of)
        .filter(|v| !v.is_empty())
    else {
        return NO_RATING.to_owned();
    };

    let count = select_in(container, selectors::RATING_COUNT)
        .map(text_of)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| ZERO_RATINGS.to_owned());

    format!("{value} ({count})")
}

fn select_first<'a>(doc: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    doc.select(&sel).next()
}

fn select_in<'a>(scope: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    scope.select(&sel).next()
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}

/// Finds the contact-row label `div` whose class starts with
/// `label_class_prefix` and whose text contains `label`, walks up to the
/// enclosing row (class prefix `row_class_prefix`), and returns the first
/// anchor's `href` inside it.
fn labeled_link(
    doc: &Html,
    label: &str,
    label_class_prefix: &str,
    row_class_prefix: &str,
) -> Option<String> {
    let div_sel = Selector::parse("div").ok()?;
    let anchor_sel = Selector::parse("a").ok()?;

    let label_el = doc.select(&div_sel).find(|el| {
        el.value()
            .classes()
            .any(|class| class.starts_with(label_class_prefix))
            && el.text().collect::<String>().contains(label)
    })?;

    let row = label_el.ancestors().find_map(|node| {
        ElementRef::wrap(node).filter(|el| {
            el.value().name() == "div"
                && el
                    .value()
                    .classes()
                    .any(|class| class.starts_with(row_class_prefix))
        })
    })?;

    row.select(&anchor_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
