pub mod browser;
pub mod collect;
pub mod error;
pub mod extract;
pub mod harvest;
pub mod selectors;

pub use browser::BrowserSession;
pub use collect::{collect, DetailPage};
pub use error::ScrapeError;
pub use extract::{extract_field, Field};
pub use harvest::{harvest, SearchPage};
