//! Distraction Rules
//!
//! Elements of the live page that are hidden while the reader view is active:
//! page chrome (header, footer, navigation, landmarks), sidebars, ads, social
//! and sharing widgets, comment sections and popups.
//!
//! Substring rules match anywhere in the attribute value and are
//! case-sensitive, the same as CSS `[attr*="..."]`. They overmatch on purpose
//! ("ad-" also hits "load-more"); that is the established behavior.

use crate::selector::utils::{
    class_contains, class_or_id_contains, has_class_token, has_role, id, id_contains, is_tag,
};
use crate::selector::Rule;
use crate::dom;
use dom_query::Selection;

/// Distraction rules in the order they are applied.
pub static DISTRACTING_CONTENT: &[Rule] = &[
    page_header,
    footer,
    nav,
    aside,
    landmark_role,
    chrome_class,
    ad_class,
    ad_marker,
    banner_marker,
    sidebar_marker,
    widget_class,
    comments_section,
    popup_class,
];

/// `body > header`: only page-level headers, not headers inside content.
#[must_use]
pub fn page_header(sel: &Selection) -> bool {
    is_tag(sel, "header") && is_tag(&dom::parent(sel), "body")
}

/// `footer`
#[must_use]
pub fn footer(sel: &Selection) -> bool {
    is_tag(sel, "footer")
}

/// `nav`
#[must_use]
pub fn nav(sel: &Selection) -> bool {
    is_tag(sel, "nav")
}

/// `aside`
#[must_use]
pub fn aside(sel: &Selection) -> bool {
    is_tag(sel, "aside")
}

/// `[role="banner"]`, `[role="navigation"]`, `[role="complementary"]`, `[role="contentinfo"]`
#[must_use]
pub fn landmark_role(sel: &Selection) -> bool {
    ["banner", "navigation", "complementary", "contentinfo"]
        .iter()
        .any(|role| has_role(sel, role))
}

/// `.sidebar`, `.side-bar`, `.nav`, `.navigation`, `.menu`, `.footer`
#[must_use]
pub fn chrome_class(sel: &Selection) -> bool {
    ["sidebar", "side-bar", "nav", "navigation", "menu", "footer"]
        .iter()
        .any(|token| has_class_token(sel, token))
}

/// `.advertisement`, `.ad`, `.ads`
#[must_use]
pub fn ad_class(sel: &Selection) -> bool {
    ["advertisement", "ad", "ads"]
        .iter()
        .any(|token| has_class_token(sel, token))
}

/// `[class*="ad-"]`, `[id*="ad-"]`
#[must_use]
pub fn ad_marker(sel: &Selection) -> bool {
    class_or_id_contains(sel, "ad-")
}

/// `[class*="banner"]`, `[id*="banner"]`
#[must_use]
pub fn banner_marker(sel: &Selection) -> bool {
    class_or_id_contains(sel, "banner")
}

/// `[class*="sidebar"]`, `[id*="sidebar"]`
#[must_use]
pub fn sidebar_marker(sel: &Selection) -> bool {
    class_or_id_contains(sel, "sidebar")
}

/// `[class*="widget"]`, `[class*="social"]`, `[class*="share"]`,
/// `[class*="related"]`, `[class*="recommend"]`
#[must_use]
pub fn widget_class(sel: &Selection) -> bool {
    ["widget", "social", "share", "related", "recommend"]
        .iter()
        .any(|needle| class_contains(sel, needle))
}

/// `.comments`, `#comments`, `[id*="comment"]`
#[must_use]
pub fn comments_section(sel: &Selection) -> bool {
    has_class_token(sel, "comments") || id(sel) == "comments" || id_contains(sel, "comment")
}

/// `[class*="popup"]`, `[class*="modal"]`, `[class*="overlay"]`
#[must_use]
pub fn popup_class(sel: &Selection) -> bool {
    ["popup", "modal", "overlay"]
        .iter()
        .any(|needle| class_contains(sel, needle))
}
