//! Feature cards on the docs homepage

use leptos::prelude::*;

use super::{Heading, HeadingLevel};
use crate::assets::{self, SvgAsset};
use crate::styles;

/// One span of inline rich text
#[derive(Debug)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static [Inline]),
    Emphasis(&'static [Inline]),
    Code(&'static str),
    Link { href: &'static str, content: &'static [Inline] },
}

impl Inline {
    fn push_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Strong(content) | Inline::Emphasis(content) | Inline::Link { content, .. } => {
                for span in content.iter() {
                    span.push_text(out);
                }
            }
        }
    }
}

/// Card body text
#[derive(Debug)]
pub struct Description(pub &'static [Inline]);

impl Description {
    pub fn spans(&self) -> &'static [Inline] {
        self.0
    }

    /// Text content with all formatting dropped
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for span in self.0 {
            span.push_text(&mut out);
        }
        out
    }
}

#[derive(Debug)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub icon: &'static SvgAsset,
    pub description: Description,
}

/// Homepage cards, in display order
pub static FEATURE_LIST: [FeatureEntry; 3] = [
    FeatureEntry {
        title: "Real-Time Threat Intelligence",
        icon: &assets::MOUNTAIN,
        description: Description(&[Inline::Text(
            "Monitor ransomware groups and victims in real-time with data from \
             RansomLook, DeepDarkCTI, and other high-fidelity sources.",
        )]),
    },
    FeatureEntry {
        title: "Offensive Security Tools",
        icon: &assets::TREE,
        description: Description(&[Inline::Text(
            "Generate Google dorks, analyze Tor infrastructure, and correlate \
             threat actor activities with powerful analyst tools.",
        )]),
    },
    FeatureEntry {
        title: "Built for Analysts",
        icon: &assets::REACT,
        description: Description(&[Inline::Text(
            "Voice intelligence, session notes, and comprehensive tradecraft wiki \
             designed for security researchers and defenders.",
        )]),
    },
];

fn render_inline(span: &'static Inline) -> AnyView {
    match span {
        Inline::Text(text) => (*text).into_any(),
        Inline::Strong(content) => view! { <strong>{render_spans(content)}</strong> }.into_any(),
        Inline::Emphasis(content) => view! { <em>{render_spans(content)}</em> }.into_any(),
        Inline::Code(text) => view! { <code>{*text}</code> }.into_any(),
        Inline::Link { href, content } => view! { <a href=*href>{render_spans(content)}</a> }.into_any(),
    }
}

fn render_spans(spans: &'static [Inline]) -> impl IntoView {
    spans.iter().map(render_inline).collect_view()
}

/// Inline rich text, without a wrapping element
#[component]
pub fn DescriptionText(description: &'static Description) -> impl IntoView {
    render_spans(description.spans())
}

/// Single card: illustration, title, description
#[component]
pub fn Feature(entry: &'static FeatureEntry) -> impl IntoView {
    view! {
        <div class="col col--4">
            <div class="text--center">
                <svg
                    class=styles::FEATURE_SVG
                    role="img"
                    viewBox=entry.icon.view_box()
                    xmlns="http://www.w3.org/2000/svg"
                    inner_html=entry.icon.body()
                ></svg>
            </div>
            <div class="text--center padding-horiz--md">
                <Heading level=HeadingLevel::H3>{entry.title}</Heading>
                <p>
                    <DescriptionText description=&entry.description />
                </p>
            </div>
        </div>
    }
}

/// Feature section over an arbitrary fixed list of cards
#[component]
pub fn FeatureGrid(entries: &'static [FeatureEntry]) -> impl IntoView {
    view! {
        <section class=styles::FEATURES>
            <div class="container">
                <div class="row">
                    {entries.iter().map(|entry| view! { <Feature entry=entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature section for the homepage
#[component]
pub fn HomepageFeatures() -> impl IntoView {
    view! { <FeatureGrid entries=&FEATURE_LIST /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    const CARD: &str = r#"class="col col--4""#;

    fn render_homepage_features() -> String {
        view! { <HomepageFeatures /> }.to_html()
    }

    #[test]
    fn test_renders_one_card_per_entry() {
        let html = render_homepage_features();
        assert_eq!(html.matches(CARD).count(), FEATURE_LIST.len());
        assert_eq!(html.matches("<h3").count(), 3);
        assert_eq!(html.matches("<p>").count(), 3);
    }

    #[test]
    fn test_headings_in_declared_order() {
        let html = render_homepage_features();
        let expected = ["Real-Time Threat Intelligence", "Offensive Security Tools", "Built for Analysts"];

        let positions: Vec<usize> = expected
            .iter()
            .map(|title| html.find(&format!(">{}<", title)).unwrap_or_else(|| panic!("missing {}", title)))
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_heading_text_matches_title() {
        let html = render_homepage_features();
        for (card, entry) in html.split(CARD).skip(1).zip(FEATURE_LIST.iter()) {
            let heading_start = card.find("<h3").unwrap();
            let text_start = heading_start + card[heading_start..].find('>').unwrap() + 1;
            let text_len = card[text_start..].find('<').unwrap();
            assert_eq!(&card[text_start..text_start + text_len], entry.title);
        }
    }

    #[test]
    fn test_card_body_contains_description() {
        let html = render_homepage_features();
        for (card, entry) in html.split(CARD).skip(1).zip(FEATURE_LIST.iter()) {
            assert!(card.contains(&entry.description.plain_text()), "{}", entry.title);
        }
    }

    #[test]
    fn test_icons_rendered_inline() {
        let html = render_homepage_features();
        assert_eq!(html.matches(r#"role="img""#).count(), 3);
        assert_eq!(html.matches(&format!(r#"class="{}""#, styles::FEATURE_SVG)).count(), 3);
        assert!(html.contains(r#"viewBox="0 0 200 200""#));
        assert!(html.contains("<title>Onion routing tree</title>"));
    }

    #[test]
    fn test_section_uses_style_module() {
        let html = render_homepage_features();
        assert!(html.contains(&format!(r#"<section class="{}""#, styles::FEATURES)));
        assert!(html.contains(r#"<div class="container"><div class="row">"#));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        assert_eq!(render_homepage_features(), render_homepage_features());
    }

    #[test]
    fn test_empty_list_renders_no_cards() {
        let html = view! { <FeatureGrid entries=&[] /> }.to_html();
        assert!(html.contains("<section"));
        assert!(html.contains(r#"class="row""#));
        assert_eq!(html.matches(CARD).count(), 0);
    }

    static FORMATTED: Description = Description(&[
        Inline::Text("Fed by "),
        Inline::Link {
            href: "https://www.ransomlook.io",
            content: &[Inline::Strong(&[Inline::Text("RansomLook")])],
        },
        Inline::Text(" and "),
        Inline::Emphasis(&[Inline::Code("etl_engine")]),
    ]);

    #[test]
    fn test_nested_formatting() {
        let html = view! { <p><DescriptionText description=&FORMATTED /></p> }.to_html();
        assert!(html.contains(r#"<a href="https://www.ransomlook.io"><strong>RansomLook"#));
        assert!(html.contains("<em><code>etl_engine</code>"));
    }

    #[test]
    fn test_plain_text_drops_formatting() {
        assert_eq!(FORMATTED.plain_text(), "Fed by RansomLook and etl_engine");
    }

    #[test]
    fn test_fixed_descriptions() {
        assert_eq!(
            FEATURE_LIST[1].description.plain_text(),
            "Generate Google dorks, analyze Tor infrastructure, and correlate threat actor \
             activities with powerful analyst tools."
        );
    }
}
