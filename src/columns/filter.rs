// src/columns/filter.rs

use std::borrow::Cow;

use tracing::debug;

use crate::table::SheetTable;

/// Lowercase substrings marking a column as personal contact data.
static SENSITIVE_MARKERS: &[&str] = &["電子郵件", "email", "mail"];

/// Substring test, not exact match: "email_backup" also qualifies.
fn is_sensitive(header: &str) -> bool {
    let name = header.to_lowercase();
    SENSITIVE_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Remove every column whose header looks like personal contact data.
///
/// Cell positions are dropped by their index in the original headers, so a
/// row shorter than the header row simply has nothing to drop at the
/// missing positions. Relative order of the surviving columns is kept.
/// A table without sensitive columns is returned as-is, borrowed.
pub fn scrub_sensitive(table: &SheetTable) -> Cow<'_, SheetTable> {
    let drop: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| is_sensitive(header))
        .map(|(i, _)| i)
        .collect();

    if drop.is_empty() {
        return Cow::Borrowed(table);
    }
    debug!(columns = ?drop, "scrubbing sensitive columns");

    let keep = |cells: &[String]| -> Vec<String> {
        cells
            .iter()
            .enumerate()
            .filter(|(i, _)| !drop.contains(i))
            .map(|(_, cell)| cell.clone())
            .collect()
    };

    let headers = keep(&table.headers);
    let rows = table.rows.iter().map(|row| keep(row)).collect();
    Cow::Owned(SheetTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn clean_table_is_returned_borrowed_and_unchanged() {
        let table = SheetTable::new(
            cells(&["標題", "作者", "連結"]),
            vec![cells(&["a", "b", "c"])],
        );
        let scrubbed = scrub_sensitive(&table);
        assert!(matches!(scrubbed, Cow::Borrowed(_)));
        assert_eq!(*scrubbed, table);
    }

    #[test]
    fn drops_email_columns_from_headers_and_rows() {
        let table = SheetTable::new(
            cells(&["作者", "電子郵件", "連結", "Email Address"]),
            vec![cells(&["alice", "alice@example.com", "x.com", "alice@other.com"])],
        );
        let scrubbed = scrub_sensitive(&table);
        assert_eq!(scrubbed.headers, cells(&["作者", "連結"]));
        assert_eq!(scrubbed.rows, vec![cells(&["alice", "x.com"])]);
    }

    #[test]
    fn detection_is_a_substring_test() {
        let table = SheetTable::new(
            cells(&["email_backup", "mailing list", "title"]),
            vec![cells(&["a", "b", "c"])],
        );
        let scrubbed = scrub_sensitive(&table);
        assert_eq!(scrubbed.headers, cells(&["title"]));
    }

    #[test]
    fn short_rows_skip_out_of_range_positions() {
        let table = SheetTable::new(
            cells(&["作者", "連結", "email"]),
            vec![cells(&["alice"]), cells(&["bob", "y.com", "bob@example.com"])],
        );
        let scrubbed = scrub_sensitive(&table);
        assert_eq!(scrubbed.rows[0], cells(&["alice"]));
        assert_eq!(scrubbed.rows[1], cells(&["bob", "y.com"]));
    }

    #[test]
    fn scrubbing_is_idempotent() {
        let table = SheetTable::new(
            cells(&["作者", "電子郵件"]),
            vec![cells(&["alice", "alice@example.com"])],
        );
        let once = scrub_sensitive(&table).into_owned();
        let twice = scrub_sensitive(&once);
        assert!(matches!(twice, Cow::Borrowed(_)));
        assert_eq!(*twice, once);
    }
}
