//! # accessible-reader
//!
//! Reader-view content isolation for HTML pages, plus the settings model of
//! the accessibility toolkit around it.
//!
//! The reader view guesses which subtree of a page is its main readable
//! content, hides everything else in place, and mounts a sanitized copy of
//! that content in an overlay. Headings are never dropped from the copy.
//! Deactivation restores the page exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use accessible_reader::{dom, ReaderView};
//!
//! let paragraph = format!("<p>{}</p>", "A sentence worth reading. ".repeat(10));
//! let html = format!(
//!     "<body><nav>Menu</nav><article><h1>Title</h1>{paragraph}{paragraph}</article></body>"
//! );
//! let doc = dom::parse(&html);
//!
//! let mut reader = ReaderView::new(&doc);
//! reader.activate()?;
//! assert!(reader.is_active());
//!
//! reader.deactivate();
//! # Ok::<(), accessible_reader::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Main-content selection**: semantic markup first, then a scoring scan
//! - **Distraction hiding**: reversible, one ledger entry per hidden element
//! - **Isolated view**: sanitized copy with heading protection
//! - **Settings**: font scale, contrast and color modes, messages, badge text

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Inline `style` handling for display state.
pub mod style;

/// Selector infrastructure and rule tables.
pub mod selector;

/// Content scoring heuristic.
pub mod scoring;

/// Main-content candidate selection.
pub mod candidate;

/// Hidden-element ledger and distraction hiding.
pub mod ledger;

/// Clone sanitization with heading protection.
pub mod sanitize;

/// Isolated view construction.
pub mod view;

/// Reader view controller.
pub mod reader;

/// Accessibility settings, messages and commands.
pub mod settings;

/// Document-level marker classes for visual features.
pub mod markers;

/// Readable page text for text-to-speech.
pub mod speech;

// Public API - re-exports
pub use candidate::{find_main_content, is_valid_main_content, select_main_content, MainContent, Strategy};
pub use error::{Error, Result};
pub use ledger::{hide_distractions, restore_distractions, HiddenLedger};
pub use options::Options;
pub use reader::ReaderView;
pub use result::IsolateResult;
pub use sanitize::{sanitize, SanitizeReport};
pub use settings::{AccessibilitySettings, ColorBlindMode};
pub use view::{build_isolated_view, IsolatedView};

/// Activates the reader view on an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use accessible_reader::isolate;
///
/// let paragraph = format!("<p>{}</p>", "Some readable text. ".repeat(12));
/// let html = format!("<body><aside>x</aside><main>{paragraph}{paragraph}</main></body>");
///
/// let result = isolate(&html)?;
/// assert_eq!(result.main_tag, "main");
/// assert_eq!(result.hidden_count, 1);
/// # Ok::<(), accessible_reader::Error>(())
/// ```
pub fn isolate(html: &str) -> Result<IsolateResult> {
    isolate_with_options(html, &Options::default())
}

/// Activates the reader view on an HTML document with custom options.
///
/// Returns [`Error::NoMainContent`] when nothing qualifies as main content.
pub fn isolate_with_options(html: &str, options: &Options) -> Result<IsolateResult> {
    let doc = dom::parse(html);
    isolate_document(&doc, options)
}

/// Activates the reader view on an already parsed document and leaves it
/// active.
///
/// The document keeps every mutation (hidden elements, mounted overlay,
/// marker class); there is no handle left to deactivate it.
pub fn isolate_document(doc: &dom::Document, options: &Options) -> Result<IsolateResult> {
    let mut reader = ReaderView::with_options(doc, options.clone());
    reader.activate()?;

    let mut result = IsolateResult {
        hidden_count: reader.hidden_count(),
        ..IsolateResult::default()
    };

    if let Some(found) = reader.main_content() {
        result.main_tag = dom::tag_name(&found.element).unwrap_or_default();
        result.main_id = dom::id(&found.element);
        result.score = scoring::content_score(&found.element);
        result.set_strategy(found.strategy);
    }
    if let Some(report) = reader.sanitize_report() {
        result.removed_count = report.removed;
        result.headings_before = report.headings_before;
        result.headings_after = report.headings_after;
    }
    if let Some(overlay) = reader.overlay() {
        result.view_html = dom::outer_html(overlay).to_string();
    }
    result.document_html = doc.html().to_string();

    Ok(result)
}
