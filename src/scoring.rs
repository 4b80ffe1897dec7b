//! Content scoring for main-content candidates.
//!
//! A weighted heuristic over text length, paragraph and heading counts, ad
//! and navigation markers, and semantic tags. Downstream selection depends on
//! the exact numbers, so the weights are constants rather than options.

use dom_query::Selection;

use crate::dom;
use crate::selector::{self, utils, Rule};

/// Text length contributes `len / TEXT_DIVISOR` points...
pub const TEXT_DIVISOR: f64 = 100.0;
/// ...capped at this many.
pub const TEXT_CAP: f64 = 50.0;
/// Points per `p` descendant.
pub const PARAGRAPH_WEIGHT: f64 = 5.0;
/// Points per h1–h6 descendant.
pub const HEADING_WEIGHT: f64 = 3.0;
/// Penalty per ad/banner-marked descendant.
pub const AD_PENALTY: f64 = 10.0;
/// Penalty per navigation landmark descendant.
pub const NAV_PENALTY: f64 = 5.0;
/// Bonus for an `article` or `main` tag.
pub const SEMANTIC_TAG_BONUS: f64 = 20.0;
/// Bonus for `role="main"`.
pub const MAIN_ROLE_BONUS: f64 = 15.0;

/// `[class*="ad"]`, `[id*="ad"]`, `[class*="banner"]`
///
/// Plain substring match: "ad-unit" and "header" both hit.
static AD_MARKERS: &[Rule] = &[class_has_ad, id_has_ad, class_has_banner];

/// `nav`, `[role="navigation"]`
static NAV_LANDMARKS: &[Rule] = &[is_nav, has_navigation_role];

fn class_has_ad(sel: &Selection) -> bool {
    utils::class_contains(sel, "ad")
}

fn id_has_ad(sel: &Selection) -> bool {
    utils::id_contains(sel, "ad")
}

fn class_has_banner(sel: &Selection) -> bool {
    utils::class_contains(sel, "banner")
}

fn is_nav(sel: &Selection) -> bool {
    utils::is_tag(sel, "nav")
}

fn has_navigation_role(sel: &Selection) -> bool {
    utils::has_role(sel, "navigation")
}

/// The raw counts a score is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentSignals {
    /// Characters of trimmed text, descendants included.
    pub text_length: usize,
    /// `p` descendants.
    pub paragraphs: usize,
    /// h1–h6 descendants.
    pub headings: usize,
    /// Descendants carrying an ad/banner marker.
    pub ad_markers: usize,
    /// `nav` / `role="navigation"` descendants.
    pub nav_landmarks: usize,
    pub is_article: bool,
    pub is_main: bool,
    pub has_main_role: bool,
}

impl ContentSignals {
    /// Collect signals for one element.
    #[must_use]
    pub fn collect(sel: &Selection) -> Self {
        let tag = utils::tag(sel);
        Self {
            text_length: dom::trimmed_text_len(sel),
            paragraphs: sel.select("p").length(),
            headings: sel.select(utils::HEADING_SELECTOR).length(),
            ad_markers: selector::count_any(sel, AD_MARKERS),
            nav_landmarks: selector::count_any(sel, NAV_LANDMARKS),
            is_article: tag == "article",
            is_main: tag == "main",
            has_main_role: utils::has_role(sel, "main"),
        }
    }

    /// Apply the weights.
    #[must_use]
    pub fn score(&self) -> f64 {
        let mut score = (self.text_length as f64 / TEXT_DIVISOR).min(TEXT_CAP);
        score += self.paragraphs as f64 * PARAGRAPH_WEIGHT;
        score += self.headings as f64 * HEADING_WEIGHT;
        score -= self.ad_markers as f64 * AD_PENALTY;
        score -= self.nav_landmarks as f64 * NAV_PENALTY;

        if self.is_article {
            score += SEMANTIC_TAG_BONUS;
        }
        if self.is_main {
            score += SEMANTIC_TAG_BONUS;
        }
        if self.has_main_role {
            score += MAIN_ROLE_BONUS;
        }
        score
    }
}

/// Content score of a single element.
///
/// ```text
/// min(len / 100, 50) + 5·p + 3·h − 10·ads − 5·navs
///   + 20 [article] + 20 [main] + 15 [role=main]
/// ```
///
/// # Example
///
/// ```rust
/// use accessible_reader::{dom, scoring};
///
/// let doc = dom::parse("<article><h2>Title</h2><p>One</p><p>Two</p></article>");
/// let score = scoring::content_score(&doc.select("article"));
///
/// // 11 chars of text, 2 paragraphs, 1 heading, article bonus.
/// assert!((score - (0.11 + 10.0 + 3.0 + 20.0)).abs() < 1e-9);
/// ```
#[must_use]
pub fn content_score(sel: &Selection) -> f64 {
    ContentSignals::collect(sel).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(html: &str, css: &str) -> f64 {
        let doc = dom::parse(html);
        content_score(&doc.select(css))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_text_contribution_is_capped() {
        let long = "x".repeat(10_000);
        let html = format!("<div id=\"t\">{long}</div>");
        assert!(approx(score_of(&html, "#t"), TEXT_CAP));

        let short = "x".repeat(250);
        let html = format!("<div id=\"t\">   {short}   </div>");
        assert!(approx(score_of(&html, "#t"), 2.5));
    }

    #[test]
    fn test_paragraphs_and_headings() {
        let html = r#"<div id="t"><h1></h1><h3></h3><p></p><p></p><p></p></div>"#;
        assert!(approx(score_of(html, "#t"), 3.0 * 5.0 + 2.0 * 3.0));
    }

    #[test]
    fn test_ad_penalty_per_marked_descendant() {
        let html = r#"<div id="t"><span class="ad-unit"></span><span class="ad-unit"></span></div>"#;
        assert!(approx(score_of(html, "#t"), -20.0));
    }

    #[test]
    fn test_ad_marker_is_substring_match() {
        // "gradient" contains "ad", so it is penalized like any other hit.
        let html = r#"<div id="t"><span class="gradient-bg"></span></div>"#;
        assert!(approx(score_of(html, "#t"), -10.0));

        let html = r#"<div id="t"><span class="hero-bg"></span></div>"#;
        assert!(approx(score_of(html, "#t"), 0.0));
    }

    #[test]
    fn test_ad_marker_counts_each_element_once() {
        let html = r#"<div id="t"><span id="ad1" class="ad banner"></span></div>"#;
        assert!(approx(score_of(html, "#t"), -10.0));
    }

    #[test]
    fn test_banner_id_is_not_an_ad_marker() {
        let html = r#"<div id="t"><span id="top-banner"></span></div>"#;
        assert!(approx(score_of(html, "#t"), 0.0));
    }

    #[test]
    fn test_ad_marker_is_case_sensitive() {
        let html = r#"<div id="t"><span class="AD-UNIT"></span></div>"#;
        assert!(approx(score_of(html, "#t"), 0.0));
    }

    #[test]
    fn test_nav_penalty() {
        let html = r#"<div id="t"><nav></nav><ul role="navigation"></ul></div>"#;
        assert!(approx(score_of(html, "#t"), -10.0));
    }

    #[test]
    fn test_semantic_bonuses_are_additive() {
        assert!(approx(score_of("<article></article>", "article"), 20.0));
        assert!(approx(score_of("<main></main>", "main"), 20.0));
        assert!(approx(score_of(r#"<main role="main"></main>"#, "main"), 35.0));
        assert!(approx(score_of(r#"<div id="t" role="main"></div>"#, "#t"), 15.0));
    }

    #[test]
    fn test_element_itself_is_not_counted() {
        // Only descendants count toward penalties.
        let html = r#"<nav id="t" class="ad"><p>x</p></nav>"#;
        assert!(approx(score_of(html, "#t"), 0.01 + 5.0));
    }

    #[test]
    fn test_signals() {
        let doc = dom::parse(r#"<section id="t"><h2>a</h2><p>b</p><nav></nav></section>"#);
        let signals = ContentSignals::collect(&doc.select("#t"));

        assert_eq!(signals.text_length, 2);
        assert_eq!(signals.paragraphs, 1);
        assert_eq!(signals.headings, 1);
        assert_eq!(signals.nav_landmarks, 1);
        assert_eq!(signals.ad_markers, 0);
        assert!(!signals.is_article);
    }
}
