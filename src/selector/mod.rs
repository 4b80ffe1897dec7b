//! Selector Infrastructure
//!
//! Rules are plain predicate functions over a `Selection`, one per CSS-like
//! pattern, so the reader view never depends on selector strings for its
//! built-in behavior. User-supplied CSS selectors go through [`query_css`],
//! which reports malformed input instead of silently matching nothing.

use dom_query::{Document, Matcher, Selection};

use crate::error::{Error, Result};

pub mod content;
pub mod distraction;
pub mod removal;

pub mod utils;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use accessible_reader::selector::{self, utils};
/// use accessible_reader::dom;
///
/// let doc = dom::parse(r#"<div><p class="content">text</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_content_class(sel: &dom_query::Selection) -> bool {
///     utils::class(sel).contains("content")
/// }
///
/// let result = selector::query(&root, has_content_class);
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}

/// Query for all elements matching the rule
///
/// Iterates through all descendants in document order and collects all
/// elements for which the rule returns true.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

/// Count descendants matching any of the rules. Each element counts once.
#[must_use]
pub fn count_any(root: &Selection, rules: &[Rule]) -> usize {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rules.iter().any(|rule| rule(sel)))
        .count()
}

/// Like [`query`], but over the whole document including `<html>` itself.
#[must_use]
pub fn query_document(doc: &Document, rule: Rule) -> Option<Selection<'_>> {
    doc.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}

/// Like [`query_all`], but over the whole document including `<html>` itself.
#[must_use]
pub fn query_document_all(doc: &Document, rule: Rule) -> Vec<Selection<'_>> {
    doc.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

/// Checks that a user-supplied CSS selector parses.
///
/// # Errors
///
/// Returns [`Error::InvalidSelector`] if the selector cannot be parsed.
pub fn validate_css(css: &str) -> Result<()> {
    Matcher::new(css)
        .map(|_| ())
        .map_err(|_| Error::InvalidSelector(css.to_string()))
}

/// Query descendants with a user-supplied CSS selector.
///
/// # Errors
///
/// Returns [`Error::InvalidSelector`] if the selector cannot be parsed.
pub fn query_css<'a>(root: &Selection<'a>, css: &str) -> Result<Vec<Selection<'a>>> {
    let matcher = Matcher::new(css).map_err(|_| Error::InvalidSelector(css.to_string()))?;
    Ok(root
        .select_matcher(&matcher)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect())
}
