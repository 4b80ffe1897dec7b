//! Clone sanitization with heading protection.
//!
//! Strips page furniture from the isolated copy of the main content without
//! ever dropping a heading. Headings, their parents and their grandparents
//! form a protected set that is computed before anything is removed, since
//! removal destroys the ancestry it is based on.

use std::collections::HashSet;

use dom_query::{NodeId, Selection};

use crate::dom;
use crate::options::Options;
use crate::selector::{self, removal, utils};

/// What a sanitization pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    pub headings_before: usize,
    pub headings_after: usize,
    /// Elements removed (nested removals inside an already removed element
    /// are not counted).
    pub removed: usize,
}

/// Every heading under `root`, plus its parent and grandparent.
#[must_use]
pub fn protected_set(root: &Selection) -> HashSet<NodeId> {
    let mut protected = HashSet::new();

    for node in root.select(utils::HEADING_SELECTOR).nodes() {
        protected.insert(node.id);

        let heading = Selection::from(*node);
        let parent = dom::parent(&heading);
        if let Some(parent_id) = dom::node_id(&parent) {
            protected.insert(parent_id);
            if let Some(grandparent_id) = dom::node_id(&dom::parent(&parent)) {
                protected.insert(grandparent_id);
            }
        }
    }

    protected
}

/// Keep rule shared by every removal pass: protected, a heading, or holding one.
fn must_keep(sel: &Selection, protected: &HashSet<NodeId>) -> bool {
    dom::node_id(sel).is_some_and(|id| protected.contains(&id))
        || utils::is_heading(sel)
        || utils::has_heading_descendant(sel)
}

/// Remove `candidates` that are still attached under `root` and not kept.
fn remove_unkept(root: &Selection, candidates: Vec<Selection>, protected: &HashSet<NodeId>) -> usize {
    let mut removed = 0;
    for element in candidates {
        if must_keep(&element, protected) || !dom::is_ancestor_of(root, &element) {
            continue;
        }
        dom::remove(&element);
        removed += 1;
    }
    removed
}

/// Sanitize a detached copy of the main content in place.
///
/// The built-in removal rules run first, then `options.extra_removal_selectors`
/// (malformed ones are skipped with a warning), then unprotected `header`
/// elements that carry no heading.
pub fn sanitize(root: &Selection, options: &Options) -> SanitizeReport {
    let headings_before = root.select(utils::HEADING_SELECTOR).length();
    let protected = protected_set(root);
    let mut removed = 0;

    for rule in removal::REMOVABLE_CONTENT {
        removed += remove_unkept(root, selector::query_all(root, *rule), &protected);
    }

    for css in &options.extra_removal_selectors {
        match selector::query_css(root, css) {
            Ok(candidates) => removed += remove_unkept(root, candidates, &protected),
            Err(err) => tracing::warn!("reader view: skipping removal selector: {err}"),
        }
    }

    for header in selector::query_all(root, removal::header) {
        let is_protected = dom::node_id(&header).is_some_and(|id| protected.contains(&id));
        if is_protected || utils::has_heading_descendant(&header) {
            continue;
        }
        if dom::is_ancestor_of(root, &header) {
            dom::remove(&header);
            removed += 1;
        }
    }

    let headings_after = root.select(utils::HEADING_SELECTOR).length();
    tracing::debug!(
        "reader view: {headings_before} headings in clone, {headings_after} after cleaning"
    );

    SanitizeReport {
        headings_before,
        headings_after,
        removed,
    }
}
