// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::table::SheetTable;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Response body of the `values.get` endpoint. The API omits `values`
/// entirely when the requested range is empty.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Thin client for the Google Sheets `values.get` API.
pub struct SheetsClient {
    client: Client,
    api_key: String,
}

impl SheetsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Fetch one sheet as a table: the first row becomes the headers, the
    /// rest become data rows. A sheet with no values yields an empty table.
    ///
    /// Transport and authentication failures are hard errors; nothing is
    /// retried here.
    pub async fn fetch_table(&self, spreadsheet_id: &str, sheet_name: &str) -> Result<SheetTable> {
        let url = self.values_url(spreadsheet_id, sheet_name);
        let range: ValueRange = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("requesting sheet {sheet_name} of {spreadsheet_id}"))?
            .error_for_status()
            .context("Sheets API rejected the request")?
            .json()
            .await
            .context("decoding Sheets API response")?;

        let table = table_from_values(range.values);
        info!(
            columns = table.headers.len(),
            rows = table.row_count(),
            "fetched sheet"
        );
        Ok(table)
    }

    fn values_url(&self, spreadsheet_id: &str, sheet_name: &str) -> Url {
        let mut url = Url::parse(SHEETS_API_BASE).expect("Sheets API base URL should be valid");
        url.path_segments_mut()
            .expect("https URLs always have path segments")
            .push(spreadsheet_id)
            .push("values")
            .push(sheet_name);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

/// Split a raw value grid into headers + data rows.
fn table_from_values(values: Vec<Vec<String>>) -> SheetTable {
    let mut values = values.into_iter();
    let headers = values.next().unwrap_or_default();
    SheetTable::new(headers, values.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_becomes_headers() {
        let table = table_from_values(vec![
            vec!["標題".to_string(), "作者".to_string()],
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]);
        assert_eq!(table.headers, vec!["標題", "作者"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1], vec!["c"]);
    }

    #[test]
    fn empty_grid_yields_empty_table() {
        let table = table_from_values(Vec::new());
        assert!(table.headers.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn value_range_tolerates_missing_values_field() {
        let range: ValueRange = serde_json::from_str(r#"{"range":"Sheet1!A1:E1"}"#).unwrap();
        assert!(range.values.is_empty());

        let range: ValueRange =
            serde_json::from_str(r#"{"values":[["h1","h2"],["1","2"]]}"#).unwrap();
        assert_eq!(range.values.len(), 2);
    }

    #[test]
    fn values_url_encodes_sheet_name_and_key() {
        let client = SheetsClient::new("secret");
        let url = client.values_url("abc123", "工作表 1");
        let rendered = url.as_str();
        assert!(rendered.starts_with("https://sheets.googleapis.com/v4/spreadsheets/abc123/values/"));
        assert!(!rendered.contains(' '));
        assert!(rendered.ends_with("key=secret"));
    }
}
