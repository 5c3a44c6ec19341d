//! # docs-site
//!
//! Static renderer for the RansomStat CTI documentation homepage.
//!
//! Pages are Leptos components rendered with SSR straight to strings; no
//! hydration or reactive runtime is involved. The homepage is a hero header
//! followed by the feature cards in [`components::FEATURE_LIST`].
//!
//! ```rust
//! use docs_site::{config::SiteSettings, render_home_page};
//!
//! let html = render_home_page(&SiteSettings::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod assets;
pub mod build;
pub mod components;
pub mod config;
pub mod pages;
pub mod styles;

use components::{HomepageFeatures, SiteDocument};
use config::SiteSettings;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pages::HomePage;

/// Render the full homepage document, doctype included
pub fn render_home_page(settings: &SiteSettings) -> String {
    let page_settings = settings.clone();
    let doc = view! {
        <SiteDocument title=settings.home_title() description=settings.meta_description.clone()>
            <HomePage settings=page_settings />
        </SiteDocument>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render only the feature section, for embedding in another page
pub fn render_features() -> String {
    view! { <HomepageFeatures /> }.to_html()
}
