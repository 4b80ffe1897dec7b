//! Text handed to a speech engine.

use std::sync::LazyLock;

use dom_query::{Document, Selection};
use regex::Regex;

use crate::dom;
use crate::selector::{self, utils};

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// `main, article, [role="main"]`
fn is_speech_root(sel: &Selection) -> bool {
    utils::is_one_of_tags(sel, &["main", "article"]) || utils::has_role(sel, "main")
}

/// `script, style, nav, aside, .ad, [class*="ad-"]`
fn is_unspoken(sel: &Selection) -> bool {
    utils::is_one_of_tags(sel, &["script", "style", "nav", "aside"])
        || utils::has_class_token(sel, "ad")
        || utils::class_contains(sel, "ad-")
}

/// Trim and collapse whitespace runs to single spaces.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Readable text of the page.
///
/// Reads the first `main`, `article` or `[role="main"]` element, or `body`
/// when there is none, without script, style, navigation, asides and ads.
/// The document itself is not modified.
#[must_use]
pub fn page_text(document: &Document) -> String {
    let source = selector::query_document(document, is_speech_root)
        .unwrap_or_else(|| document.select("body"));
    let tag = dom::tag_name(&source).unwrap_or_default();

    let cloned = dom::clone_subtree(&source);
    let root = dom::fragment_root(&cloned, &tag);
    for element in selector::query_all(&root, is_unspoken) {
        if dom::is_ancestor_of(&root, &element) {
            dom::remove(&element);
        }
    }

    normalize_text(&dom::text_content(&root))
}

/// Selected text worth speaking, if any.
#[must_use]
pub fn speakable_selection(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
