//! Writes the rendered site to an output directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::{self, SvgAsset};
use crate::config::SiteSettings;
use crate::render_home_page;

/// Name of the homepage file in the output directory
pub const INDEX_FILE: &str = "index.html";

/// Result of a site build
#[derive(Debug)]
pub struct BuildReport {
    pub index_path: PathBuf,
    pub assets_checked: usize,
    pub bytes_written: usize,
}

/// Check each asset, stopping at the first malformed one
pub fn check_assets(assets: &[&SvgAsset]) -> Result<usize> {
    for asset in assets {
        asset.validate()?;
        debug!(asset = asset.name, view_box = ?asset.view_box(), "asset ok");
    }
    Ok(assets.len())
}

/// Validate the bundled assets, render the homepage and write it to `out_dir`
pub fn build_site(out_dir: &Path, settings: &SiteSettings) -> Result<BuildReport> {
    build_site_with(out_dir, settings, &assets::ALL)
}

/// [`build_site`] over an explicit asset list. Nothing is written when an asset is malformed.
pub fn build_site_with(out_dir: &Path, settings: &SiteSettings, assets: &[&SvgAsset]) -> Result<BuildReport> {
    let assets_checked = check_assets(assets).context("Bundled illustrations are malformed")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let html = render_home_page(settings);
    let index_path = out_dir.join(INDEX_FILE);
    fs::write(&index_path, &html).with_context(|| format!("Failed to write {}", index_path.display()))?;

    info!(path = %index_path.display(), bytes = html.len(), "wrote homepage");

    Ok(BuildReport {
        index_path,
        assets_checked,
        bytes_written: html.len(),
    })
}
