use leptos::prelude::*;

use crate::styles::SITE_CSS;

/// Complete HTML document around a page body.
///
/// Leptos does not emit the doctype; the `render_*` functions prepend it.
#[component]
pub fn SiteDocument(#[prop(into)] title: String, #[prop(into)] description: String, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                <meta name="description" content=description />
                <style>{SITE_CSS}</style>
            </head>
            <body>{children()}</body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_document_head() {
        let html = view! {
            <SiteDocument title="Hello from RansomStat CTI" description="Field manual">
                <main>"body"</main>
            </SiteDocument>
        }
        .to_html();

        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Hello from RansomStat CTI</title>"));
        assert!(html.contains(r#"name="description" content="Field manual""#));
        assert!(html.contains(".featureSvg {"));
        assert!(html.contains("<main>body</main>"));
    }
}
