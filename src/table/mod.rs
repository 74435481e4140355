use std::collections::BTreeMap;

/// One tabular snapshot of a sheet: the header row plus every data row
/// below it.
///
/// Row arity is deliberately not enforced against `headers` — the Sheets
/// API trims trailing empty cells, so a row shorter (or longer) than the
/// header row is an expected shape, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    /// Column names, from the first row of the sheet.
    pub headers: Vec<String>,
    /// Each data row, one `String` per cell.
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows, regardless of arity.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Project rows into name-keyed records for template consumption.
    ///
    /// A row whose cell count disagrees with the header count contributes
    /// no record. With duplicate header names the later cell wins the key.
    pub fn records(&self) -> Vec<BTreeMap<String, String>> {
        self.rows
            .iter()
            .filter(|row| row.len() == self.headers.len())
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}
