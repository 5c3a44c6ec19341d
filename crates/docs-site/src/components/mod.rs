mod document;
mod heading;
mod homepage_features;

pub use document::SiteDocument;
pub use heading::{Heading, HeadingLevel};
pub use homepage_features::{
    Description, DescriptionText, FEATURE_LIST, Feature, FeatureEntry, FeatureGrid, HomepageFeatures, Inline,
};
