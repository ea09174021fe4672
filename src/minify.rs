//! HTML minification as an injected strategy.
//!
//! The writer is handed a [`Minifier`] chosen once at startup: the real
//! `minify-html` implementation, or a passthrough that returns its input
//! unchanged (`--no-minify`). Page renderers never know which one is in
//! play, and the choice cannot change mid-run.
//!
//! The real implementation sticks to options that cannot alter content
//! semantics: whitespace collapsing, comment stripping, and conservative
//! CSS/JS sub-minification. Nothing that rewrites attribute values or
//! reorders elements.

use minify_html::Cfg;

/// Compresses a rendered HTML document. Infallible: a minifier that cannot
/// improve the input returns it unchanged.
pub trait Minifier {
    fn minify(&self, html: &str) -> Vec<u8>;
}

/// `minify-html` with fixed conservative options.
pub struct HtmlMinifier {
    cfg: Cfg,
}

impl HtmlMinifier {
    pub fn new() -> Self {
        Self {
            cfg: Cfg {
                keep_closing_tags: true,
                keep_html_and_head_opening_tags: true,
                minify_css: true,
                minify_js: true,
                ..Cfg::default()
            },
        }
    }
}

impl Default for HtmlMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Minifier for HtmlMinifier {
    fn minify(&self, html: &str) -> Vec<u8> {
        minify_html::minify(html.as_bytes(), &self.cfg)
    }
}

/// Identity strategy: bytes out equal bytes in.
pub struct Passthrough;

impl Minifier for Passthrough {
    fn minify(&self, html: &str) -> Vec<u8> {
        html.as_bytes().to_vec()
    }
}

/// Select the strategy once at startup.
pub fn select(enabled: bool) -> Box<dyn Minifier> {
    if enabled {
        Box::new(HtmlMinifier::new())
    } else {
        Box::new(Passthrough)
    }
}
