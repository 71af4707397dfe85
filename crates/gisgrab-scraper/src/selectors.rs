//! CSS selectors for the 2GIS web application.
//!
//! 2GIS ships obfuscated, build-generated class names (`_1rkbbi0` and
//! friends) that churn across frontend releases. Where the markup carries a
//! `data-testid` role marker we prefer it; class-pattern selectors are the
//! fallback for fields with no stable marker. Everything brittle about the
//! target site is concentrated here.

/// The scrollable result-list container on the search page.
pub const SCROLL_PANEL: &str = r#"div[class*="_1rkbbi0"]"#;

/// A result card's link to its detail page.
pub const CARD_LINK: &str = r#"a[href*="/firm/"]"#;

/// Primary heading of a detail page. Its visibility is the page-ready signal.
pub const DETAIL_HEADER: &str = "h1";

pub const ADDRESS_LINK: &str = r#"a[data-testid="address-link"]"#;

pub const WEBSITE_LINK: &str = r#"a[data-testid="website-link"]"#;

/// On-page label text for the website row. Russian because 2GIS renders its
/// chrome in Russian; the fallback walks from this label to the sibling
/// container holding the actual link.
pub const WEBSITE_LABEL_TEXT: &str = "Веб-сайт";

/// Class prefix of the label element in a contact row.
pub const WEBSITE_LABEL_CLASS_PREFIX: &str = "_13eh3hv";

/// Class prefix of the contact-row container enclosing a label and its link.
pub const CONTACT_ROW_CLASS_PREFIX: &str = "_b0ke8";

/// The phone contact marker. This is a larger interactive region; the
/// formatted number lives in a nested element ([`PHONE_NUMBER`]).
pub const PHONE_LINK: &str = r#"a[data-testid="contacts-phone-link"]"#;

pub const PHONE_NUMBER: &str = r#"b[class*="_20m50x1"]"#;

/// Rating block. No `data-testid` exists for ratings, so a class pattern is
/// the only handle.
pub const RATING_CONTAINER: &str = r#"div[class*="_1az2g0c"]"#;

pub const RATING_VALUE: &str = r#"div[class*="_y10azs"]"#;

pub const RATING_COUNT: &str = r#"div[class*="_jspzdm"]"#;

/// Opening-hours status text, e.g. "Круглосуточно" or "Закрыто до завтра".
pub const HOURS_STATUS: &str = r#"div[class*="_d9xlex"]"#;
