//! Clone Removal Rules
//!
//! Elements stripped from the isolated copy of the main content. These run on
//! the detached clone only; the live page is never edited by them. Heading
//! protection is applied by the caller, not here.

use crate::selector::distraction::{ad_class, comments_section, sidebar_marker, widget_class};
use crate::selector::utils::{attr, is_one_of_tags, is_tag};
use crate::selector::Rule;
use dom_query::Selection;

/// Removal rules in the order they are applied. The ad, sidebar, widget and
/// comment rules are shared with the live-page distraction table.
pub static REMOVABLE_CONTENT: &[Rule] = &[
    page_chrome,
    ad_class,
    sidebar_marker,
    widget_class,
    comments_section,
    ad_iframe,
];

/// `nav`, `aside`, `footer`
#[must_use]
pub fn page_chrome(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["nav", "aside", "footer"])
}

/// `iframe[src*="ad"]`, `iframe[src*="banner"]`
#[must_use]
pub fn ad_iframe(sel: &Selection) -> bool {
    if !is_tag(sel, "iframe") {
        return false;
    }
    let src = attr(sel, "src");
    src.contains("ad") || src.contains("banner")
}

/// `header`. Applied after [`REMOVABLE_CONTENT`] with its own keep rule.
#[must_use]
pub fn header(sel: &Selection) -> bool {
    is_tag(sel, "header")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::selector;

    #[test]
    fn test_ad_iframe_matches_src_substring() {
        let doc = dom::parse(r#"
            <iframe src="https://ads.example.com/slot"></iframe>
            <iframe src="https://cdn.example.com/banner.html"></iframe>
            <iframe src="https://video.example.com/embed"></iframe>
            <div src="ad"></div>
        "#);

        assert_eq!(selector::query_document_all(&doc, ad_iframe).len(), 2);
    }

    #[test]
    fn test_page_chrome() {
        let doc = dom::parse("<nav></nav><aside></aside><footer></footer><header></header>");
        assert_eq!(selector::query_document_all(&doc, page_chrome).len(), 3);
        assert_eq!(selector::query_document_all(&doc, header).len(), 1);
    }

    #[test]
    fn test_widget_class_substrings() {
        let doc = dom::parse(r#"
            <div class="sharebar"></div>
            <div class="recommendations"></div>
            <div class="body-copy"></div>
        "#);

        assert_eq!(selector::query_document_all(&doc, widget_class).len(), 2);
    }

    #[test]
    fn test_shared_rules_match_in_clone_table() {
        let doc = dom::parse(r#"
            <div class="ad">a</div>
            <div id="left-sidebar">b</div>
            <section id="comments">c</section>
            <p>kept</p>
        "#);
        let removable = |sel: &Selection| REMOVABLE_CONTENT.iter().any(|rule| rule(sel));

        assert!(removable(&doc.select(".ad")));
        assert!(removable(&doc.select("#left-sidebar")));
        assert!(removable(&doc.select("#comments")));
        assert!(!removable(&doc.select("p")));
    }
}
