use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// Section heading at a chosen level.
///
/// Headings below `h1` that carry an `id` get a trailing `#` permalink so
/// readers can link straight to the section. Page titles never do.
#[component]
pub fn Heading(
    level: HeadingLevel,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let anchor = id.clone().filter(|_| level != HeadingLevel::H1).map(|id| {
        view! {
            <a
                href=format!("#{}", id)
                class="hash-link"
                aria-label=format!("Direct link to {}", id)
                title=format!("Direct link to {}", id)
            >
                "\u{200B}"
            </a>
        }
    });

    match level {
        HeadingLevel::H1 => view! { <h1 id=id class=class>{children()}{anchor}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2 id=id class=class>{children()}{anchor}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3 id=id class=class>{children()}{anchor}</h3> }.into_any(),
        HeadingLevel::H4 => view! { <h4 id=id class=class>{children()}{anchor}</h4> }.into_any(),
        HeadingLevel::H5 => view! { <h5 id=id class=class>{children()}{anchor}</h5> }.into_any(),
        HeadingLevel::H6 => view! { <h6 id=id class=class>{children()}{anchor}</h6> }.into_any(),
    }
}
