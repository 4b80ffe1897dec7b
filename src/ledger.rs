//! Hidden-element ledger.
//!
//! Tracks every live element the reader view hides together with the display
//! state and raw `style` attribute it had before, so deactivation can put the
//! page back exactly as it was. Each element is recorded at most once: the first recorded state is
//! the real pre-activation one, anything later would be our own
//! `display: none`.

use std::collections::HashSet;

use dom_query::{Document, NodeId, Selection};

use crate::dom;
use crate::options::Options;
use crate::selector::{self, distraction};
use crate::style;

/// One hidden element and its display state before hiding.
#[derive(Clone)]
pub struct HiddenEntry<'a> {
    pub element: Selection<'a>,
    /// Inline `display` value before hiding; `None` if there was none.
    pub display: Option<String>,
    /// The `style` attribute before hiding, written back verbatim on restore.
    pub style: Option<String>,
}

/// Mapping from element identity to pre-hide display state.
#[derive(Default)]
pub struct HiddenLedger<'a> {
    entries: Vec<HiddenEntry<'a>>,
    index: HashSet<NodeId>,
}

impl<'a> HiddenLedger<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hidden elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the element has an entry.
    #[must_use]
    pub fn contains(&self, sel: &Selection) -> bool {
        dom::node_id(sel).is_some_and(|id| self.index.contains(&id))
    }

    /// Recorded pre-hide display state of an element, if it was hidden.
    #[must_use]
    pub fn recorded_display(&self, sel: &Selection) -> Option<Option<&str>> {
        let id = dom::node_id(sel)?;
        self.entries
            .iter()
            .find(|entry| dom::node_id(&entry.element) == Some(id))
            .map(|entry| entry.display.as_deref())
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> impl Iterator<Item = &HiddenEntry<'a>> {
        self.entries.iter()
    }

    /// Record the element's display state and hide it.
    ///
    /// Returns `false` without touching anything if the element already has
    /// an entry.
    pub fn hide(&mut self, sel: &Selection<'a>) -> bool {
        let Some(id) = dom::node_id(sel) else {
            return false;
        };
        if !self.index.insert(id) {
            return false;
        }

        self.entries.push(HiddenEntry {
            element: sel.clone(),
            display: style::display(sel),
            style: style::inline_style(sel),
        });
        style::hide(sel);
        true
    }

    /// Put every recorded display state back and empty the ledger.
    ///
    /// Returns the number of elements restored.
    pub fn restore(&mut self) -> usize {
        let restored = self.entries.len();
        for entry in self.entries.drain(..) {
            style::restore_inline_style(&entry.element, entry.style.as_deref());
        }
        self.index.clear();
        restored
    }
}

/// True if hiding `sel` would hide the kept content: it is the content, one
/// of its ancestors, or inside it.
fn shelters_main_content(sel: &Selection, main_content: &Selection) -> bool {
    dom::contains(sel, main_content) || dom::is_ancestor_of(main_content, sel)
}

/// Hide everything on the live page that is not the main content.
///
/// Two passes: the distraction rules (plus any extra selectors from
/// `options`), then every direct child of `body` that neither is the overlay
/// nor holds the main content.
#[must_use]
pub fn hide_distractions<'a>(
    doc: &'a Document,
    main_content: &Selection<'a>,
    options: &Options,
) -> HiddenLedger<'a> {
    let mut ledger = HiddenLedger::new();

    for rule in distraction::DISTRACTING_CONTENT {
        for element in selector::query_document_all(doc, *rule) {
            if !shelters_main_content(&element, main_content) {
                ledger.hide(&element);
            }
        }
    }

    let root = doc.select("html");
    for css in &options.extra_distraction_selectors {
        match selector::query_css(&root, css) {
            Ok(elements) => {
                for element in elements {
                    if !shelters_main_content(&element, main_content) {
                        ledger.hide(&element);
                    }
                }
            }
            Err(err) => tracing::warn!("reader view: skipping distraction selector: {err}"),
        }
    }

    for node in dom::children(&doc.select("body")).nodes() {
        let child = Selection::from(*node);
        if dom::id(&child).as_deref() == Some(options.overlay_id.as_str()) {
            continue;
        }
        if dom::contains(&child, main_content) {
            continue;
        }
        ledger.hide(&child);
    }

    tracing::debug!("reader view: hid {} elements", ledger.len());
    ledger
}

/// Restore every element in the ledger and leave it empty.
pub fn restore_distractions(ledger: &mut HiddenLedger) {
    let restored = ledger.restore();
    tracing::debug!("reader view: restored {restored} elements");
}
