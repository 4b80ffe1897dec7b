//! Isolated view construction.
//!
//! The view is built in its own document: a sanitized deep copy of the main
//! content behind a dismiss button, inside the overlay container. Nothing in
//! the source page is touched until the caller mounts the result.

use dom_query::{Document, Selection};

use crate::dom;
use crate::options::Options;
use crate::sanitize::{sanitize, SanitizeReport};

/// Glyph shown on the dismiss button.
pub const CLOSE_GLYPH: &str = "✕";

/// A ready-to-mount isolated view.
pub struct IsolatedView {
    document: Document,
    report: SanitizeReport,
}

impl IsolatedView {
    /// The overlay container.
    #[must_use]
    pub fn root(&self) -> Selection<'_> {
        dom::fragment_root(&self.document, "div")
    }

    /// The sanitized copy of the main content.
    #[must_use]
    pub fn content(&self) -> Option<Selection<'_>> {
        dom::children(&self.root())
            .nodes()
            .get(1)
            .map(|node| Selection::from(*node))
    }

    /// The dismiss button.
    #[must_use]
    pub fn close_button(&self) -> Selection<'_> {
        self.root().select("button").first()
    }

    /// Serialized overlay, ready to be appended to a page.
    #[must_use]
    pub fn html(&self) -> String {
        dom::outer_html(&self.root()).to_string()
    }

    /// What sanitization removed from the copy.
    #[must_use]
    pub fn report(&self) -> SanitizeReport {
        self.report
    }
}

/// Build the isolated view for `main_content`.
///
/// The copy has its `class` replaced by `options.content_class`. When the main
/// content is `body`, `html` or a table part, its children and attributes are
/// carried over in a `div`, since those elements cannot be nested inside the
/// overlay.
#[must_use]
pub fn build_isolated_view(main_content: &Selection, options: &Options) -> IsolatedView {
    let tag = dom::tag_name(main_content).unwrap_or_default();
    let cloned = dom::clone_subtree(main_content);
    let copy = dom::fragment_root(&cloned, &tag);

    let report = sanitize(&copy, options);
    dom::set_attribute(&copy, "class", &options.content_class);

    let content_html = if dom::needs_own_context(&tag) {
        carry_into_div(&copy, &tag)
    } else {
        dom::outer_html(&copy).to_string()
    };

    let document = dom::parse(&format!("<div><button>{CLOSE_GLYPH}</button></div>"));
    let container = dom::fragment_root(&document, "div");
    dom::set_attribute(&container, "id", &options.overlay_id);
    dom::set_attribute(&container, "class", &options.overlay_class);

    let button = container.select("button");
    dom::set_attribute(&button, "class", &options.close_class);
    dom::set_attribute(&button, "aria-label", &options.close_label);

    dom::append_html(&container, &content_html);

    IsolatedView { document, report }
}

/// Serialize a `div` with the attributes and children of `copy`.
///
/// Rows and table sections keep their cells inside a fresh `table`.
fn carry_into_div(copy: &Selection, tag: &str) -> String {
    let inner = copy.inner_html();
    let children = match tag {
        "tr" => format!("<table><tbody><tr>{inner}</tr></tbody></table>"),
        "tbody" | "thead" | "tfoot" | "colgroup" => format!("<table>{inner}</table>"),
        _ => inner.to_string(),
    };

    let shell = dom::parse("<div></div>");
    let div = dom::fragment_root(&shell, "div");
    for (name, value) in dom::get_all_attributes(copy) {
        dom::set_attribute(&div, &name, &value);
    }
    dom::append_html(&div, &children);
    dom::outer_html(&div).to_string()
}
