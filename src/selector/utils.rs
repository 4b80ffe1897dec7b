//! Utility functions for selector pattern matching
//!
//! Helpers used throughout the selector rules for attribute access, class
//! token and substring matching, and heading detection.

use crate::dom;
use dom_query::Selection;

/// Heading tags, in level order.
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// CSS selector matching any heading level.
pub const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

// === DOM Traversal ===

/// True if any ancestor carries the given `id`.
#[must_use]
pub fn has_ancestor_with_id(sel: &Selection, expected: &str) -> bool {
    let mut current = dom::parent(sel);
    while current.exists() {
        if id(&current) == expected {
            return true;
        }
        current = dom::parent(&current);
    }
    false
}

// === String Utilities ===

/// Case-sensitive contains check
///
/// Attribute substring selectors (`[class*="ad"]`) are case-sensitive, and so
/// is this.
#[inline]
#[must_use]
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Whitespace-separated class token check, the equivalent of `.name` in CSS.
///
/// # Example
///
/// ```rust
/// use accessible_reader::selector::utils;
/// use accessible_reader::dom;
///
/// let doc = dom::parse(r#"<div class="ad-unit ad">x</div>"#);
/// let div = doc.select("div");
///
/// assert!(utils::has_class_token(&div, "ad"));
/// assert!(!utils::has_class_token(&div, "ads"));
/// ```
#[must_use]
pub fn has_class_token(sel: &Selection, token: &str) -> bool {
    class(sel).split_ascii_whitespace().any(|t| t == token)
}

/// `[class*="needle"]`
#[inline]
#[must_use]
pub fn class_contains(sel: &Selection, needle: &str) -> bool {
    contains(&class(sel), needle)
}

/// `[id*="needle"]`
#[inline]
#[must_use]
pub fn id_contains(sel: &Selection, needle: &str) -> bool {
    contains(&id(sel), needle)
}

/// `[class*="needle"], [id*="needle"]`
#[inline]
#[must_use]
pub fn class_or_id_contains(sel: &Selection, needle: &str) -> bool {
    class_contains(sel, needle) || id_contains(sel, needle)
}

/// `[role="value"]`
#[inline]
#[must_use]
pub fn has_role(sel: &Selection, role: &str) -> bool {
    attr(sel, "role") == role
}

// === Element Type Checks ===

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}

/// Check if element is one of the specified tags
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}

/// h1 through h6.
#[inline]
#[must_use]
pub fn is_heading(sel: &Selection) -> bool {
    is_one_of_tags(sel, HEADING_TAGS)
}

/// True if at least one descendant is a heading.
#[must_use]
pub fn has_heading_descendant(sel: &Selection) -> bool {
    sel.select(HEADING_SELECTOR).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_contains_case_sensitive() {
        assert!(contains("ad-unit", "ad"));
        assert!(!contains("AD-UNIT", "ad"));
        assert!(contains("gradient-bg", "ad"));
    }

    #[test]
    fn test_attribute_helpers_return_empty_when_missing() {
        let doc = dom::parse("<div>nothing</div>");
        let div = doc.select("div");

        assert_eq!(id(&div), "");
        assert_eq!(class(&div), "");
        assert_eq!(attr(&div, "role"), "");
    }

    #[test]
    fn test_class_token_vs_substring() {
        let doc = dom::parse(r#"<div class="sidebar-left comments-open">x</div>"#);
        let div = doc.select("div");

        assert!(class_contains(&div, "sidebar"));
        assert!(!has_class_token(&div, "sidebar"));
        assert!(!has_class_token(&div, "comments"));
        assert!(has_class_token(&div, "comments-open"));
    }

    #[test]
    fn test_class_or_id_contains() {
        let doc = dom::parse(r#"<div id="top-banner">x</div><div class="banner">y</div><div>z</div>"#);
        let divs: Vec<Selection> = doc
            .select("div")
            .nodes()
            .iter()
            .map(|node| Selection::from(*node))
            .collect();

        assert!(class_or_id_contains(&divs[0], "banner"));
        assert!(class_or_id_contains(&divs[1], "banner"));
        assert!(!class_or_id_contains(&divs[2], "banner"));
    }

    #[test]
    fn test_has_role() {
        let doc = dom::parse(r#"<div role="main">x</div>"#);
        let div = doc.select("div");

        assert!(has_role(&div, "main"));
        assert!(!has_role(&div, "navigation"));
    }

    #[test]
    fn test_heading_checks() {
        let doc = dom::parse(r#"<nav><h2>Section</h2></nav><aside><p>x</p></aside>"#);

        assert!(is_heading(&doc.select("h2")));
        assert!(!is_heading(&doc.select("nav")));
        assert!(has_heading_descendant(&doc.select("nav")));
        assert!(!has_heading_descendant(&doc.select("aside")));
    }

    #[test]
    fn test_has_ancestor_with_id() {
        let doc = dom::parse(r#"<div id="content"><article><p id="t">x</p></article></div>"#);
        let p = doc.select("#t");

        assert!(has_ancestor_with_id(&p, "content"));
        assert!(!has_ancestor_with_id(&p, "main"));
    }
}
