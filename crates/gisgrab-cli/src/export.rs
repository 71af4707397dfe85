//! CSV export of collected listings.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use gisgrab_core::Listing;

/// Writes `listings` to `path` as UTF-8 CSV with a fixed header row.
///
/// Returns `false` — and creates no file — when there is nothing to write.
/// The column order is the `Listing` field order:
/// `name,address,website,phone,link,rating,hours`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row cannot be
/// serialized.
pub fn save(path: &Path, listings: &[Listing]) -> anyhow::Result<bool> {
    if listings.is_empty() {
        return Ok(false);
    }
    let file = File::create(path)?;
    write_records(file, listings)?;
    Ok(true)
}

fn write_records<W: Write>(writer: W, listings: &[Listing]) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for listing in listings {
        csv_writer.serialize(listing)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use gisgrab_core::{NO_RATING, UNKNOWN};

    use super::*;

    fn listing(name: &str, link: &str) -> Listing {
        Listing {
            name: name.to_owned(),
            address: "Тверская, 1".to_owned(),
            website: UNKNOWN.to_owned(),
            phone: "+7 495 000-00-00".to_owned(),
            link: link.to_owned(),
            rating: NO_RATING.to_owned(),
            hours: "Круглосуточно".to_owned(),
        }
    }

    #[test]
    fn two_records_produce_header_plus_two_rows() {
        let listings = vec![
            listing("Первый", "https://2gis.ru/moscow/firm/1"),
            listing("Второй", "https://2gis.ru/moscow/firm/2"),
        ];
        let mut buf = Vec::new();
        write_records(&mut buf, &listings).unwrap();

        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "name,address,website,phone,link,rating,hours");
        assert!(lines[1].starts_with("Первый,"));
        assert!(lines[2].starts_with("Второй,"));
    }

    #[test]
    fn save_with_zero_records_creates_no_file() {
        let path = std::env::temp_dir().join(format!("gisgrab-empty-{}.csv", std::process::id()));
        let written = save(&path, &[]).unwrap();
        assert!(!written);
        assert!(!path.exists());
    }

    #[test]
    fn save_writes_file_for_nonempty_batch() {
        let path = std::env::temp_dir().join(format!("gisgrab-out-{}.csv", std::process::id()));
        let listings = vec![listing("Кафе", "https://2gis.ru/moscow/firm/1")];
        let written = save(&path, &listings).unwrap();
        assert!(written);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Кафе"));
        std::fs::remove_file(&path).unwrap();
    }
}
