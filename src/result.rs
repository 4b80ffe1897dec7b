//! Result type for one-shot isolation.
//!
//! Summarizes what an activation did to a document, for callers that only
//! want the outcome (the CLI prints it as JSON).

use serde::Serialize;

use crate::candidate::Strategy;

/// Outcome of isolating the main content of an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IsolateResult {
    /// Tag of the chosen main-content element.
    pub main_tag: String,

    /// `id` of the chosen element, if it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_id: Option<String>,

    /// The semantic rule that matched, or `None` when scoring picked it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_rule: Option<String>,

    /// Content score of the chosen element.
    pub score: f64,

    /// Elements hidden on the page.
    pub hidden_count: usize,

    /// Elements removed from the isolated copy.
    pub removed_count: usize,

    /// Headings in the copy before and after sanitization.
    pub headings_before: usize,
    pub headings_after: usize,

    /// The overlay as mounted.
    pub view_html: String,

    /// The whole page with the reader view active.
    #[serde(skip)]
    pub document_html: String,
}

impl IsolateResult {
    /// `"semantic"` or `"scored"`.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        if self.matched_rule.is_some() {
            "semantic"
        } else {
            "scored"
        }
    }

    pub(crate) fn set_strategy(&mut self, strategy: Strategy) {
        self.matched_rule = match strategy {
            Strategy::Semantic(rule) => Some(rule.to_string()),
            Strategy::Scored(_) => None,
        };
    }
}
