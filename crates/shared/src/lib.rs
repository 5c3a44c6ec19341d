//! Static site configuration shared by the docs crates

/// Static site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    // Root path the site is served under, always with leading and trailing slash
    pub base_url: &'static str,
    pub meta_description: &'static str,

    pub docs_entry: DocsEntry,
}

/// Call to action shown in the homepage hero
pub struct DocsEntry {
    pub label: &'static str,
    pub href: &'static str,
}

pub static CONFIG: Config = Config {
    name: "RansomStat CTI",
    tagline: "Real-time ransomware intelligence for researchers and defenders",

    base_url: "/",
    meta_description: "Documentation for RansomStat CTI, a consolidated operating picture of the ransomware landscape.",

    docs_entry: DocsEntry {
        label: "Read the Field Manual",
        href: "/docs/intro",
    },
};
