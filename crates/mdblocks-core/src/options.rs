//! Feature switches consulted by the parser.

use serde::{Deserialize, Serialize};

/// Options controlling which block kinds and inline rewrites are recognized.
///
/// Disabling `tables` or `images` makes those lines fall through to
/// paragraphs. Disabling `links` leaves `[label](url)` and `<scheme://..>`
/// as literal (escaped) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Recognize `|...|` table rows
    pub tables: bool,
    /// Recognize whole-line `![alt](url)` images
    pub images: bool,
    /// Rewrite inline links and autolinks
    pub links: bool,
    /// Keep the fence info string as the code block `language`
    pub code_language: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            images: true,
            links: true,
            code_language: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert!(opts.tables);
        assert!(opts.images);
        assert!(opts.links);
        assert!(!opts.code_language);
    }
}
