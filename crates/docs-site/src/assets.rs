//! Vector illustrations bundled into the binary.
//!
//! Every SVG under `static/img/` is embedded with `include_str!`, so a missing
//! file fails the build rather than the render. The markup is kept verbatim;
//! [`SvgAsset::view_box`] and [`SvgAsset::body`] split it so components can
//! emit their own `<svg>` root with page-specific classes.

use thiserror::Error;

const SVG_OPEN: &str = "<svg";
const SVG_CLOSE: &str = "</svg>";
const VIEW_BOX_ATTR: &str = "viewBox=\"";

/// Malformed asset markup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset '{name}' has no <svg> root element")]
    MissingRoot { name: &'static str },

    #[error("asset '{name}' is missing its closing </svg> tag")]
    Unterminated { name: &'static str },

    #[error("asset '{name}' has no viewBox on its root element")]
    MissingViewBox { name: &'static str },
}

/// An SVG file embedded at compile time
#[derive(Debug)]
pub struct SvgAsset {
    pub name: &'static str,
    source: &'static str,
}

impl SvgAsset {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }

    /// Byte range of the root `<svg ...>` open tag (start, index of its `>`)
    fn open_tag(&self) -> Option<(usize, usize)> {
        let start = self.source.find(SVG_OPEN)?;
        let end = start + self.source[start..].find('>')?;
        Some((start, end))
    }

    /// Value of the root element's `viewBox` attribute
    pub fn view_box(&self) -> Option<&'static str> {
        let source = self.source;
        let (start, end) = self.open_tag()?;
        let tag = &source[start..end];
        let value_start = tag.find(VIEW_BOX_ATTR)? + VIEW_BOX_ATTR.len();
        let value_len = tag[value_start..].find('"')?;
        Some(&tag[value_start..value_start + value_len])
    }

    /// Markup between the root open tag and the final `</svg>`.
    ///
    /// Empty when the file is malformed; [`SvgAsset::validate`] reports why.
    pub fn body(&self) -> &'static str {
        let source = self.source;
        let Some((_, open_end)) = self.open_tag() else {
            return "";
        };
        match source.rfind(SVG_CLOSE) {
            Some(close) if close > open_end => source[open_end + 1..close].trim(),
            _ => "",
        }
    }

    pub fn validate(&self) -> Result<(), AssetError> {
        let name = self.name;
        let (_, open_end) = self.open_tag().ok_or(AssetError::MissingRoot { name })?;

        // Self-closing roots have no body to inline
        if self.source[..open_end].ends_with('/') {
            return Err(AssetError::Unterminated { name });
        }
        match self.source.rfind(SVG_CLOSE) {
            Some(close) if close > open_end => {}
            _ => return Err(AssetError::Unterminated { name }),
        }

        self.view_box().ok_or(AssetError::MissingViewBox { name })?;
        Ok(())
    }
}

pub static MOUNTAIN: SvgAsset = SvgAsset::new(
    "undraw_docusaurus_mountain.svg",
    include_str!("../static/img/undraw_docusaurus_mountain.svg"),
);

pub static TREE: SvgAsset = SvgAsset::new(
    "undraw_docusaurus_tree.svg",
    include_str!("../static/img/undraw_docusaurus_tree.svg"),
);

pub static REACT: SvgAsset = SvgAsset::new(
    "undraw_docusaurus_react.svg",
    include_str!("../static/img/undraw_docusaurus_react.svg"),
);

/// Every bundled asset, checked by the site build before writing output
pub static ALL: [&SvgAsset; 3] = [&MOUNTAIN, &TREE, &REACT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_assets_are_valid() {
        for asset in ALL {
            assert_eq!(asset.validate(), Ok(()), "{}", asset.name);
        }
    }

    #[test]
    fn test_view_box_read_from_root_tag() {
        assert_eq!(MOUNTAIN.view_box(), Some("0 0 200 200"));
    }

    #[test]
    fn test_body_strips_root_element() {
        let body = TREE.body();
        assert!(body.starts_with("<title>"));
        assert!(body.ends_with("/>"));
        assert!(!body.contains("<svg"));
        assert!(!body.contains("</svg>"));
        assert!(!body.contains("<?xml"));
    }

    #[test]
    fn test_view_box_ignores_nested_elements() {
        let asset = SvgAsset::new("nested.svg", r#"<svg width="10"><svg viewBox="0 0 1 1"></svg></svg>"#);
        assert_eq!(asset.view_box(), None);
        assert_eq!(asset.validate(), Err(AssetError::MissingViewBox { name: "nested.svg" }));
    }

    #[test]
    fn test_missing_root() {
        let asset = SvgAsset::new("plain.svg", "<div></div>");
        assert_eq!(asset.validate(), Err(AssetError::MissingRoot { name: "plain.svg" }));
        assert_eq!(asset.body(), "");
    }

    #[test]
    fn test_unterminated_root() {
        let open = SvgAsset::new("open.svg", r#"<svg viewBox="0 0 1 1"><rect/>"#);
        assert_eq!(open.validate(), Err(AssetError::Unterminated { name: "open.svg" }));
        assert_eq!(open.body(), "");

        let self_closing = SvgAsset::new("empty.svg", r#"<svg viewBox="0 0 1 1"/>"#);
        assert_eq!(self_closing.validate(), Err(AssetError::Unterminated { name: "empty.svg" }));
    }

    #[test]
    fn test_error_message_names_asset() {
        let err = AssetError::MissingViewBox { name: "logo.svg" };
        assert_eq!(err.to_string(), "asset 'logo.svg' has no viewBox on its root element");
    }
}
