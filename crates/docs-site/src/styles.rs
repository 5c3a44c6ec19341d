//! Stylesheet for the docs homepage.
//!
//! The class-name constants are the homepage's own style module; the rest of
//! [`SITE_CSS`] is the small slice of grid, hero and button utilities the
//! page relies on. Three `.col--4` cards share a row on desktop and stack
//! below 996px.

/// Feature section wrapper
pub const FEATURES: &str = "features";
/// Feature card illustration
pub const FEATURE_SVG: &str = "featureSvg";
/// Hero header
pub const HERO_BANNER: &str = "heroBanner";
/// Hero call-to-action row
pub const BUTTONS: &str = "buttons";

pub const SITE_CSS: &str = r#"
:root {
    --site-color-primary: #b91c1c;
    --site-color-primary-dark: #7f1d1d;
    --site-color-secondary: #e5e7eb;
    --site-font-color: #1c1e21;
    --site-font-family: system-ui, -apple-system, 'Segoe UI', Roboto, Ubuntu, sans-serif;
    --site-spacing-horizontal: 1rem;
    --site-container-width: 1140px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    color: var(--site-font-color);
    font-family: var(--site-font-family);
    line-height: 1.65;
}

.container {
    margin: 0 auto;
    max-width: var(--site-container-width);
    padding: 0 var(--site-spacing-horizontal);
    width: 100%;
}

.row {
    display: flex;
    flex-wrap: wrap;
    margin: 0 calc(var(--site-spacing-horizontal) * -1);
}

.col {
    flex: 1 0;
    margin-left: 0;
    max-width: 100%;
    padding: 0 var(--site-spacing-horizontal);
    width: 100%;
}

.col--4 {
    flex: 0 0 33.3333%;
    max-width: 33.3333%;
}

.text--center {
    text-align: center;
}

.padding-horiz--md {
    padding-left: 1rem;
    padding-right: 1rem;
}

.hero {
    align-items: center;
    display: flex;
    padding: 4rem 0;
}

.hero--primary {
    background-color: var(--site-color-primary);
    color: #fff;
}

.hero__title {
    font-size: 3rem;
    margin: 0 0 0.5rem;
}

.hero__subtitle {
    font-size: 1.5rem;
    margin: 0 0 1.5rem;
}

.button {
    border: 1px solid transparent;
    border-radius: 0.4rem;
    cursor: pointer;
    display: inline-block;
    font-weight: 700;
    padding: 0.375rem 1.5rem;
    text-decoration: none;
}

.button--secondary {
    background-color: var(--site-color-secondary);
    color: var(--site-font-color);
}

.button--lg {
    font-size: 1.2rem;
    padding: 0.5rem 2rem;
}

.hash-link {
    opacity: 0;
    padding-left: 0.5rem;
    text-decoration: none;
}

h2:hover .hash-link, h3:hover .hash-link, h4:hover .hash-link,
h5:hover .hash-link, h6:hover .hash-link, .hash-link:focus {
    opacity: 1;
}

.heroBanner {
    overflow: hidden;
    padding: 4rem 0;
    position: relative;
    text-align: center;
}

.buttons {
    align-items: center;
    display: flex;
    justify-content: center;
}

.features {
    align-items: center;
    display: flex;
    padding: 2rem 0;
    width: 100%;
}

.featureSvg {
    height: 200px;
    width: 200px;
}

@media screen and (max-width: 996px) {
    .col--4 {
        flex-basis: 100%;
        max-width: 100%;
    }

    .heroBanner {
        padding: 2rem;
    }
}
"#;
