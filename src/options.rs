//! Configuration options for the reader view.
//!
//! The `Options` struct controls main-content validity thresholds, the
//! class and id names written into the page, and extra user-supplied
//! selectors for hiding and removal.

use crate::error::Result;
use crate::selector;

/// Configuration options for the reader view.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use accessible_reader::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_text_length: 500,
///     extra_removal_selectors: vec![".newsletter-signup".to_string()],
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// A semantic candidate needs strictly more trimmed text than this
    /// (characters) to count as main content.
    ///
    /// Default: `300`
    pub min_text_length: usize,

    /// A semantic candidate needs at least this many `p` descendants.
    ///
    /// Default: `2`
    pub min_paragraphs: usize,

    /// `id` of the overlay container. Body children with this id are never hidden.
    ///
    /// Default: `"makeitaccessible-reader-overlay"`
    pub overlay_id: String,

    /// `class` of the overlay container.
    ///
    /// Default: `"makeitaccessible-reader-overlay"`
    pub overlay_class: String,

    /// `class` that replaces the cloned content's own classes.
    ///
    /// Default: `"makeitaccessible-reader-content"`
    pub content_class: String,

    /// `class` of the dismiss button.
    ///
    /// Default: `"makeitaccessible-reader-close"`
    pub close_class: String,

    /// `aria-label` of the dismiss button.
    ///
    /// Default: `"Exit reader view"`
    pub close_label: String,

    /// Marker class put on `<html>` while the reader view is active.
    ///
    /// Default: `"makeitaccessible-reader-active"`
    pub active_class: String,

    /// Extra CSS selectors hidden on the live page, after the built-in rules.
    ///
    /// Malformed selectors are skipped with a warning.
    ///
    /// Default: empty
    pub extra_distraction_selectors: Vec<String>,

    /// Extra CSS selectors removed from the isolated copy, after the built-in
    /// rules and subject to the same heading protection.
    ///
    /// Malformed selectors are skipped with a warning.
    ///
    /// Default: empty
    pub extra_removal_selectors: Vec<String>,
}

impl Options {
    /// Checks every extra selector up front.
    ///
    /// The reader view itself tolerates bad selectors; this is for callers
    /// that would rather reject a configuration early.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSelector`] for the first selector that
    /// does not parse.
    pub fn validate(&self) -> Result<()> {
        self.extra_distraction_selectors
            .iter()
            .chain(&self.extra_removal_selectors)
            .try_for_each(|css| selector::validate_css(css))
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_text_length: 300,
            min_paragraphs: 2,
            overlay_id: "makeitaccessible-reader-overlay".to_string(),
            overlay_class: "makeitaccessible-reader-overlay".to_string(),
            content_class: "makeitaccessible-reader-content".to_string(),
            close_class: "makeitaccessible-reader-close".to_string(),
            close_label: "Exit reader view".to_string(),
            active_class: "makeitaccessible-reader-active".to_string(),
            extra_distraction_selectors: Vec::new(),
            extra_removal_selectors: Vec::new(),
        }
    }
}
