//! DOM Operations Adapter
//!
//! Provides the small set of tree operations the reader view needs on top of
//! the `dom_query` crate: attribute access, tag and text inspection, node
//! identity and ancestry, subtree cloning and removal.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// All attributes of the first node as `(name, value)` pairs, in source order
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Add a class token if missing
pub fn add_class(sel: &Selection, token: &str) {
    let current = class_name(sel).unwrap_or_default();
    if current.split_whitespace().any(|t| t == token) {
        return;
    }
    let updated = if current.trim().is_empty() {
        token.to_string()
    } else {
        format!("{} {token}", current.trim())
    };
    set_attribute(sel, "class", &updated);
}

/// Remove every occurrence of a class token, dropping the attribute when it
/// ends up empty
pub fn remove_class(sel: &Selection, token: &str) {
    let Some(current) = class_name(sel) else {
        return;
    };
    let remaining: Vec<&str> = current.split_whitespace().filter(|t| *t != token).collect();
    if remaining.is_empty() {
        remove_attribute(sel, "class");
    } else {
        set_attribute(sel, "class", &remaining.join(" "));
    }
}

/// Add or remove a class token
pub fn set_class(sel: &Selection, token: &str, present: bool) {
    if present {
        add_class(sel, token);
    } else {
        remove_class(sel, token);
    }
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Identity of the first node in the selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

/// True when both selections start with the same node.
#[must_use]
pub fn is_same_node(a: &Selection, b: &Selection) -> bool {
    match (node_id(a), node_id(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Character count of the trimmed text content.
#[must_use]
pub fn trimmed_text_len(sel: &Selection) -> usize {
    sel.text().trim().chars().count()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Returns true if `ancestor` is a strict ancestor of `node`.
#[must_use]
pub fn is_ancestor_of(ancestor: &Selection, node: &Selection) -> bool {
    let Some(ancestor_id) = node_id(ancestor) else {
        return false;
    };

    let mut current = parent(node);
    while current.exists() {
        if node_id(&current) == Some(ancestor_id) {
            return true;
        }
        current = parent(&current);
    }
    false
}

/// Returns true if `container` is `node` itself or one of its ancestors.
///
/// Mirrors `Node.contains()` from the browser DOM.
#[must_use]
pub fn contains(container: &Selection, node: &Selection) -> bool {
    is_same_node(container, node) || is_ancestor_of(container, node)
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Append HTML content
#[inline]
pub fn append_html(sel: &Selection, html: &str) {
    sel.append_html(html);
}

/// Markup an element with this tag must be parsed inside, as `(open, close)`.
///
/// Table parts are dropped by the parser when they appear outside a table, so
/// a serialized `td` only survives a reparse inside `table > tbody > tr`.
#[must_use]
pub fn table_context(tag: &str) -> Option<(&'static str, &'static str)> {
    match tag {
        "td" | "th" => Some(("<table><tbody><tr>", "</tr></tbody></table>")),
        "tr" => Some(("<table><tbody>", "</tbody></table>")),
        "tbody" | "thead" | "tfoot" | "caption" | "colgroup" => Some(("<table>", "</table>")),
        "col" => Some(("<table><colgroup>", "</colgroup></table>")),
        _ => None,
    }
}

/// True for elements that cannot be placed inside a plain `div`: the
/// document roots and table parts.
#[must_use]
pub fn needs_own_context(tag: &str) -> bool {
    matches!(tag, "html" | "body") || table_context(tag).is_some()
}

/// Deep-clone an element into a new, detached document.
///
/// The source document is not touched. Use [`fragment_root`] to get the
/// cloned element back out of the returned document.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Document {
    let html = outer_html(sel);
    let tag = tag_name(sel).unwrap_or_default();
    match table_context(&tag) {
        Some((open, close)) => Document::from(format!("{open}{html}{close}")),
        None => Document::from(html),
    }
}

/// Locate the cloned element inside a document produced by [`clone_subtree`].
///
/// The HTML parser wraps fragments in `html`/`body`, so the clone is the first
/// element child of `body`, unless the clone is itself `body` or `html`. Table
/// parts are the first element of their tag, since the surrounding context
/// never repeats it.
#[must_use]
pub fn fragment_root<'a>(doc: &'a Document, tag: &str) -> Selection<'a> {
    if tag == "html" || tag == "body" || table_context(tag).is_some() {
        return doc.select(tag).first();
    }
    let body = doc.select("body");
    children(&body)
        .nodes()
        .first()
        .map_or(body.clone(), |node| Selection::from(*node))
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
