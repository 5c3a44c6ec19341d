//! Site settings: static defaults plus optional `site.toml` overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use shared::CONFIG;
use std::path::Path;

// =============================================================================
// File-based Configuration (site.toml)
// =============================================================================

/// Overrides loaded from site.toml. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub base_url: Option<String>,
    pub meta_description: Option<String>,
    pub docs_entry: Option<DocsEntryConfig>,
}

/// Hero call-to-action overrides
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsEntryConfig {
    pub label: Option<String>,
    pub href: Option<String>,
}

impl FileConfig {
    /// Load overrides from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| {
            "Invalid site config. Check for:\n\
             - Unknown keys (allowed: name, tagline, base_url, meta_description, [docs_entry] label/href)\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)"
        })
    }

    /// Merge over the static defaults
    pub fn into_settings(self) -> SiteSettings {
        let mut settings = SiteSettings::default();

        if let Some(name) = self.name {
            settings.name = name;
        }
        if let Some(tagline) = self.tagline {
            settings.tagline = tagline;
        }
        if let Some(base_url) = self.base_url {
            settings.base_url = normalize_base_url(&base_url);
        }
        if let Some(meta_description) = self.meta_description {
            settings.meta_description = meta_description;
        }
        if let Some(entry) = self.docs_entry {
            if let Some(label) = entry.label {
                settings.docs_entry.label = label;
            }
            if let Some(href) = entry.href {
                settings.docs_entry.href = href;
            }
        }

        settings
    }
}

// =============================================================================
// Runtime Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsLink {
    pub label: String,
    pub href: String,
}

/// Resolved settings used by the page renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub name: String,
    pub tagline: String,
    /// Always starts and ends with `/`
    pub base_url: String,
    pub meta_description: String,
    pub docs_entry: DocsLink,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: CONFIG.name.to_string(),
            tagline: CONFIG.tagline.to_string(),
            base_url: normalize_base_url(CONFIG.base_url),
            meta_description: CONFIG.meta_description.to_string(),
            docs_entry: DocsLink {
                label: CONFIG.docs_entry.label.to_string(),
                href: CONFIG.docs_entry.href.to_string(),
            },
        }
    }
}

impl SiteSettings {
    /// Browser tab title for the homepage
    pub fn home_title(&self) -> String {
        format!("Hello from {}", self.name)
    }

    /// Docs entry link resolved against the base URL.
    /// Absolute URLs and fragments are left untouched.
    pub fn docs_href(&self) -> String {
        resolve_href(&self.base_url, &self.docs_entry.href)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// True for `scheme:...` URIs (`https:`, `mailto:`, `tel:`, ...)
fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn resolve_href(base_url: &str, href: &str) -> String {
    // Scheme-relative, fragment-only and absolute URIs skip the base URL
    if href.starts_with("//") || href.starts_with('#') || has_scheme(href) {
        return href.to_string();
    }
    format!("{}{}", base_url, href.trim_start_matches('/'))
}
