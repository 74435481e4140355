use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sheetfolio::fetch::SheetsClient;
use sheetfolio::site::{SiteConfig, SiteGenerator};
use sheetfolio::table::SheetTable;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Generate a static portfolio site from a Google Sheets spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "sheetfolio", version, about)]
struct Args {
    /// Build from built-in sample data; no credentials needed.
    #[arg(long)]
    dry_run: bool,

    /// Output directory (overrides OUTPUT_DIR; defaults to "dist").
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) configuration: .env file, environment, CLI flags ─────────
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let output_dir = args
        .output_dir
        .or_else(|| std::env::var_os("OUTPUT_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("dist"));

    let generator = SiteGenerator::new(SiteConfig::default());

    // ─── 3) dry run: build from the fixture, verify the page landed ──
    if args.dry_run {
        generator.generate_site(&sample_table(), &output_dir)?;
        let index = output_dir.join("index.html");
        if !index.exists() {
            bail!("dry run produced no index page at {}", index.display());
        }
        info!(output = %output_dir.display(), "[dry run] site generated");
        return Ok(());
    }

    // ─── 4) fetch the sheet and generate ─────────────────────────────
    let spreadsheet_id =
        std::env::var("SPREADSHEET_ID").context("SPREADSHEET_ID must be set (or use --dry-run)")?;
    let sheet_name = std::env::var("SHEET_NAME").unwrap_or_else(|_| "Sheet1".to_string());
    let api_key =
        std::env::var("GOOGLE_API_KEY").context("GOOGLE_API_KEY must be set (or use --dry-run)")?;

    let client = SheetsClient::new(api_key);
    let table = client.fetch_table(&spreadsheet_id, &sheet_name).await?;

    generator.generate_site(&table, &output_dir)?;
    info!(output = %output_dir.display(), "site generated");
    Ok(())
}

/// Three-row fixture mirroring a typical Google Forms export.
fn sample_table() -> SheetTable {
    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    SheetTable::new(
        row(&["標題", "作者", "連結", "時間戳記", "類別"]),
        vec![
            row(&[
                "測試項目1",
                "測試作者1",
                "https://example.com/1",
                "2023/04/30 上午 10:30:45",
                "分類A",
            ]),
            row(&[
                "測試項目2",
                "測試作者2",
                "https://example.com/2",
                "2023/05/01 下午 02:45:12",
                "分類B",
            ]),
            row(&[
                "測試項目3",
                "測試作者3",
                "https://example.com/3",
                "2023/05/02 上午 09:15:30",
                "分類A",
            ]),
        ],
    )
}
