//! Inline style handling.
//!
//! A parsed document has no cascade, so an element's display state is the
//! `display` declaration of its inline `style` attribute. Hiding rewrites only
//! that declaration and keeps the other declarations as written; restoring
//! puts the original attribute back byte for byte.

use crate::dom::{self, Selection};

/// One declaration from a `style` attribute, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Declaration<'s> {
    name: &'s str,
    value: &'s str,
    /// The whole trimmed `name: value` text.
    raw: &'s str,
}

/// Split a declaration block on top-level `;`.
///
/// Semicolons inside quoted strings or parentheses (`url(data:...;base64,...)`)
/// belong to the value.
fn split_declarations(style: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in style.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                chunks.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    chunks.push(&style[start..]);
    chunks
}

fn parse_declarations(style: &str) -> Vec<Declaration<'_>> {
    split_declarations(style)
        .into_iter()
        .filter_map(|chunk| {
            let raw = chunk.trim();
            let (name, value) = raw.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(Declaration {
                name,
                value: value.trim(),
                raw,
            })
        })
        .collect()
}

fn is_display(declaration: &Declaration) -> bool {
    declaration.name.eq_ignore_ascii_case("display")
}

/// Strip a trailing `!important` flag from a declaration value.
fn strip_important(value: &str) -> &str {
    let trimmed = value.trim_end();
    match trimmed.len().checked_sub("!important".len()) {
        Some(split) if trimmed.is_char_boundary(split)
            && trimmed[split..].eq_ignore_ascii_case("!important") =>
        {
            trimmed[..split].trim_end()
        }
        _ => trimmed,
    }
}

/// Inline `display` value of the element, without any `!important` flag.
///
/// Returns `None` when the element has no inline `display` declaration.
#[must_use]
pub fn display(sel: &Selection) -> Option<String> {
    let style = dom::get_attribute(sel, "style")?;
    parse_declarations(&style)
        .into_iter()
        .rev()
        .find(is_display)
        .map(|d| strip_important(d.value).to_string())
}

/// True if the element carries an inline `display: none`.
#[must_use]
pub fn is_hidden(sel: &Selection) -> bool {
    display(sel).is_some_and(|value| value.eq_ignore_ascii_case("none"))
}

/// Set the inline `display` declaration, replacing any existing one.
///
/// The other declarations are kept as written. With `important`, the
/// declaration is written as `!important` so page stylesheets cannot
/// override it.
pub fn set_display(sel: &Selection, value: &str, important: bool) {
    let style = dom::get_attribute(sel, "style").unwrap_or_default();
    let mut kept: Vec<String> = parse_declarations(&style)
        .iter()
        .filter(|d| !is_display(d))
        .map(|d| d.raw.to_string())
        .collect();

    kept.push(if important {
        format!("display: {value} !important")
    } else {
        format!("display: {value}")
    });
    dom::set_attribute(sel, "style", &format!("{};", kept.join("; ")));
}

/// Force an element hidden with a highest-priority declaration.
pub fn hide(sel: &Selection) {
    set_display(sel, "none", true);
}

/// Raw `style` attribute, exactly as written.
#[must_use]
pub fn inline_style(sel: &Selection) -> Option<String> {
    dom::get_attribute(sel, "style")
}

/// Put back a `style` attribute previously read with [`inline_style`].
///
/// `None` removes the attribute.
pub fn restore_inline_style(sel: &Selection, previous: Option<&str>) {
    match previous {
        Some(style) => dom::set_attribute(sel, "style", style),
        None => dom::remove_attribute(sel, "style"),
    }
}
