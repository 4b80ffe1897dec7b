//! Main-content candidate selection.
//!
//! Two passes: semantic markup first, then a brute-force scoring scan over
//! every `div`, `section` and `article`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::options::Options;
use crate::scoring::content_score;
use crate::selector::{self, content};

/// How the main content was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Matched a semantic rule; carries the rule's CSS form.
    Semantic(&'static str),
    /// Won the scoring scan with this score.
    Scored(f64),
}

/// The chosen main-content element and how it was picked.
#[derive(Clone)]
pub struct MainContent<'a> {
    pub element: Selection<'a>,
    pub strategy: Strategy,
}

/// Minimum-content validity check for semantic matches.
///
/// Trimmed text strictly longer than `options.min_text_length` and at least
/// `options.min_paragraphs` paragraph descendants.
#[must_use]
pub fn is_valid_main_content(sel: &Selection, options: &Options) -> bool {
    dom::trimmed_text_len(sel) > options.min_text_length
        && sel.select("p").length() >= options.min_paragraphs
}

/// Find the element most likely to be the page's main content.
///
/// Returns `None` when neither a semantic element qualifies nor any
/// candidate scores above zero.
#[must_use]
pub fn select_main_content<'a>(doc: &'a Document, options: &Options) -> Option<Selection<'a>> {
    find_main_content(doc, options).map(|found| found.element)
}

/// Like [`select_main_content`], but also reports the strategy that won.
#[must_use]
pub fn find_main_content<'a>(doc: &'a Document, options: &Options) -> Option<MainContent<'a>> {
    semantic_match(doc, options).or_else(|| best_scored(doc))
}

fn semantic_match<'a>(doc: &'a Document, options: &Options) -> Option<MainContent<'a>> {
    content::SEMANTIC_CONTENT
        .iter()
        .zip(content::SEMANTIC_CONTENT_NAMES)
        .find_map(|(rule, name)| {
            // Only the first match per rule is considered.
            let element = selector::query_document(doc, *rule)?;
            if is_valid_main_content(&element, options) {
                tracing::debug!("reader view: main content matched semantic rule {name}");
                Some(MainContent {
                    element,
                    strategy: Strategy::Semantic(*name),
                })
            } else {
                None
            }
        })
}

/// Highest-scoring `div`/`section`/`article`. Ties go to the first in
/// document order; nothing scoring above zero yields `None`.
fn best_scored(doc: &Document) -> Option<MainContent<'_>> {
    let mut best: Option<MainContent<'_>> = None;
    let mut max_score = 0.0;

    for candidate in selector::query_document_all(doc, content::is_scoring_candidate) {
        let score = content_score(&candidate);
        if score > max_score {
            max_score = score;
            best = Some(MainContent {
                element: candidate,
                strategy: Strategy::Scored(score),
            });
        }
    }

    if let Some(found) = &best {
        tracing::debug!(
            "reader view: main content picked by score {max_score:.2} (<{}>)",
            dom::tag_name(&found.element).unwrap_or_default()
        );
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(words: usize) -> String {
        format!("<p>{}</p>", "lorem ipsum ".repeat(words))
    }

    #[test]
    fn test_validity_requires_text_and_paragraphs() {
        let options = Options::default();

        let long_two = format!("<article>{}{}</article>", paragraph(20), paragraph(20));
        let doc = dom::parse(&long_two);
        assert!(is_valid_main_content(&doc.select("article"), &options));

        let long_one = format!("<article>{}</article>", paragraph(60));
        let doc = dom::parse(&long_one);
        assert!(!is_valid_main_content(&doc.select("article"), &options));

        let short_two = "<article><p>a</p><p>b</p></article>";
        let doc = dom::parse(short_two);
        assert!(!is_valid_main_content(&doc.select("article"), &options));
    }

    #[test]
    fn test_text_threshold_is_strict() {
        let options = Options::default();
        let exactly = format!("<div id=\"t\"><p>{}</p><p></p></div>", "x".repeat(300));
        let doc = dom::parse(&exactly);
        assert!(!is_valid_main_content(&doc.select("#t"), &options));

        let over = format!("<div id=\"t\"><p>{}</p><p></p></div>", "x".repeat(301));
        let doc = dom::parse(&over);
        assert!(is_valid_main_content(&doc.select("#t"), &options));
    }

    #[test]
    fn test_semantic_article_wins() {
        let html = format!(
            "<body><div class=\"wrapper\">{}</div><article id=\"story\">{}{}</article></body>",
            paragraph(200),
            paragraph(20),
            paragraph(20)
        );
        let doc = dom::parse(&html);

        let found = find_main_content(&doc, &Options::default());
        let found = found.map(|f| (dom::id(&f.element), f.strategy));
        assert_eq!(found, Some((Some("story".to_string()), Strategy::Semantic("article"))));
    }

    #[test]
    fn test_only_first_match_per_rule_is_checked() {
        // The first <article> is too short; the second would qualify but
        // `article` only looks at the first. `#content article` picks it up.
        let html = format!(
            "<body><article id=\"teaser\"><p>short</p></article>\
             <div id=\"content\"><article id=\"story\">{}{}</article></div></body>",
            paragraph(20),
            paragraph(20)
        );
        let doc = dom::parse(&html);

        let found = find_main_content(&doc, &Options::default()).map(|f| f.strategy);
        assert_eq!(found, Some(Strategy::Semantic("#content article")));
    }

    #[test]
    fn test_falls_back_to_highest_score() {
        let html = r#"
            <body>
                <div id="low"><p>a</p><p>b</p><h2>c</h2><span class="ad"></span></div>
                <section id="high"><p>a</p><p>b</p><p>c</p><p>d</p><h2>e</h2></section>
            </body>
        "#;
        let doc = dom::parse(html);

        let found = find_main_content(&doc, &Options::default());
        assert_eq!(found.map(|f| dom::id(&f.element)), Some(Some("high".to_string())));
    }

    #[test]
    fn test_tie_goes_to_first_in_document_order() {
        let html = r#"
            <body>
                <section id="first"><p>a</p></section>
                <section id="second"><p>a</p></section>
            </body>
        "#;
        let doc = dom::parse(html);

        let found = select_main_content(&doc, &Options::default());
        assert_eq!(found.map(|f| dom::id(&f)), Some(Some("first".to_string())));
    }

    #[test]
    fn test_nothing_above_zero_returns_none() {
        let html = r#"<body><div><nav></nav></div><span>text</span></body>"#;
        let doc = dom::parse(html);

        assert!(select_main_content(&doc, &Options::default()).is_none());
    }

    #[test]
    fn test_empty_document_returns_none() {
        let doc = dom::parse("");
        assert!(select_main_content(&doc, &Options::default()).is_none());
    }
}
