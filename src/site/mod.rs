// src/site/mod.rs

pub mod template;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::columns::{remap_roles, resolve_roles, scrub_sensitive};
use crate::table::SheetTable;
use self::template::PageContext;

/// Explicit configuration for a generation run; nothing is read from
/// implicit global paths.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub subtitle: String,
    /// Source tree mirrored into `<output>/static/`.
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "作品集展示".to_string(),
            subtitle: "精選創作分享平台".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Builds the static site from one fetched table.
pub struct SiteGenerator {
    config: SiteConfig,
}

impl SiteGenerator {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline and write the site under `output_dir`.
    ///
    /// Role resolution happens on the original headers; after scrubbing,
    /// role indices are recomputed by name against the surviving headers.
    /// Safe to call repeatedly over the same directory: the page is
    /// overwritten and assets are re-copied.
    pub fn generate_site(&self, table: &SheetTable, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("creating output directory {}", output_dir.display()))?;

        let roles = resolve_roles(&table.headers);
        let scrubbed = scrub_sensitive(table);
        let roles = remap_roles(&roles, &table.headers, &scrubbed.headers);
        let records = scrubbed.records();
        debug!(
            rows = scrubbed.row_count(),
            records = records.len(),
            "projected records"
        );

        let now = Local::now();
        let ctx = PageContext {
            title: &self.config.title,
            subtitle: &self.config.subtitle,
            headers: &scrubbed.headers,
            rows: &scrubbed.rows,
            records: &records,
            roles,
            generated_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            year: now.year(),
        };

        let page = template::render_index(&ctx);
        let index_path = output_dir.join("index.html");
        fs::write(&index_path, page.into_string())
            .with_context(|| format!("writing {}", index_path.display()))?;
        info!(path = %index_path.display(), "wrote index page");

        self.copy_static_assets(output_dir)?;
        Ok(())
    }

    /// Mirror the static-asset tree into `<output>/static/`, recreating
    /// relative paths. A missing source tree is not an error.
    fn copy_static_assets(&self, output_dir: &Path) -> Result<()> {
        let source = &self.config.static_dir;
        if !source.exists() {
            debug!(source = %source.display(), "no static assets to copy");
            return Ok(());
        }

        let target_root = output_dir.join("static");
        let mut copied = 0usize;
        for entry in WalkDir::new(source) {
            let entry = entry.with_context(|| format!("walking {}", source.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(source)
                .expect("walked paths start with the walk root");
            let dest = target_root.join(rel);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::copy(entry.path(), &dest).with_context(|| {
                format!("copying {} to {}", entry.path().display(), dest.display())
            })?;
            copied += 1;
        }
        info!(copied, target = %target_root.display(), "mirrored static assets");
        Ok(())
    }
}
