use leptos::prelude::*;

use crate::components::{Heading, HeadingLevel, HomepageFeatures};
use crate::config::SiteSettings;
use crate::styles;

#[component]
pub fn HomePage(settings: SiteSettings) -> impl IntoView {
    let docs_href = settings.docs_href();

    view! {
        // Hero
        <header class=format!("hero hero--primary {}", styles::HERO_BANNER)>
            <div class="container">
                <Heading level=HeadingLevel::H1 class="hero__title">{settings.name}</Heading>
                <p class="hero__subtitle">{settings.tagline}</p>
                <div class=styles::BUTTONS>
                    <a class="button button--secondary button--lg" href=docs_href>
                        {settings.docs_entry.label}
                    </a>
                </div>
            </div>
        </header>

        <main>
            <HomepageFeatures />
        </main>
    }
}
