//! Semantic Content Rules
//!
//! Ordered rules for locating a page's main content by its markup before
//! falling back to scoring. Order is priority: the first rule whose first
//! match is valid main content wins.

use crate::selector::utils::{has_ancestor_with_id, has_class_token, has_role, is_tag};
use crate::selector::Rule;
use dom_query::Selection;

/// Semantic main-content rules in priority order.
pub static SEMANTIC_CONTENT: &[Rule] = &[
    article,
    main_element,
    role_main,
    role_article,
    class_article,
    class_post_content,
    class_entry_content,
    class_post,
    content_article,
    main_article,
];

/// Human-readable form of each rule in [`SEMANTIC_CONTENT`], for logging.
pub static SEMANTIC_CONTENT_NAMES: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    "[role=\"article\"]",
    ".article",
    ".post-content",
    ".entry-content",
    ".post",
    "#content article",
    "#main article",
];

/// `article`
#[must_use]
pub fn article(sel: &Selection) -> bool {
    is_tag(sel, "article")
}

/// `main`
#[must_use]
pub fn main_element(sel: &Selection) -> bool {
    is_tag(sel, "main")
}

/// `[role="main"]`
#[must_use]
pub fn role_main(sel: &Selection) -> bool {
    has_role(sel, "main")
}

/// `[role="article"]`
#[must_use]
pub fn role_article(sel: &Selection) -> bool {
    has_role(sel, "article")
}

/// `.article`
#[must_use]
pub fn class_article(sel: &Selection) -> bool {
    has_class_token(sel, "article")
}

/// `.post-content`
#[must_use]
pub fn class_post_content(sel: &Selection) -> bool {
    has_class_token(sel, "post-content")
}

/// `.entry-content`
#[must_use]
pub fn class_entry_content(sel: &Selection) -> bool {
    has_class_token(sel, "entry-content")
}

/// `.post`
#[must_use]
pub fn class_post(sel: &Selection) -> bool {
    has_class_token(sel, "post")
}

/// `#content article`
#[must_use]
pub fn content_article(sel: &Selection) -> bool {
    is_tag(sel, "article") && has_ancestor_with_id(sel, "content")
}

/// `#main article`
#[must_use]
pub fn main_article(sel: &Selection) -> bool {
    is_tag(sel, "article") && has_ancestor_with_id(sel, "main")
}

/// Tags the scoring fallback scans: `div, section, article`.
#[must_use]
pub fn is_scoring_candidate(sel: &Selection) -> bool {
    matches!(
        crate::selector::utils::tag(sel).as_str(),
        "div" | "section" | "article"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::selector;

    #[test]
    fn test_names_align_with_rules() {
        assert_eq!(SEMANTIC_CONTENT.len(), SEMANTIC_CONTENT_NAMES.len());
    }

    #[test]
    fn test_class_rules_use_tokens() {
        let doc = dom::parse(r#"<div class="post-content-wrapper">a</div><div class="entry-content">b</div>"#);
        let root = doc.select("body");

        assert!(selector::query(&root, class_post_content).is_none());
        assert!(selector::query(&root, class_entry_content).is_some());
    }

    #[test]
    fn test_nested_article_rules() {
        let doc = dom::parse(r#"
            <article id="teaser">short</article>
            <div id="content"><article id="story">long</article></div>
        "#);

        let found = selector::query_document(&doc, content_article);
        assert_eq!(found.map(|s| dom::id(&s)), Some(Some("story".to_string())));
        assert!(selector::query_document(&doc, main_article).is_none());
    }

    #[test]
    fn test_scoring_candidates() {
        let doc = dom::parse("<div>a</div><section>b</section><article>c</article><main>d</main>");
        let found = selector::query_document_all(&doc, is_scoring_candidate);
        assert_eq!(found.len(), 3);
    }
}
