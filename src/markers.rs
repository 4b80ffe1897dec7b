//! Document-level marker classes.
//!
//! Visual features are switched by classes on `<html>`; the stylesheets keyed
//! on them live with the extension, not here.

use dom_query::Document;

use crate::dom;
use crate::settings::{AccessibilitySettings, ColorBlindMode, DEFAULT_FONT_SIZE};

pub const FONT_SCALED: &str = "makeitaccessible-font-scaled";
pub const HIGH_CONTRAST: &str = "makeitaccessible-high-contrast";
pub const DARK_MODE: &str = "makeitaccessible-dark-mode";
pub const READING_MODE: &str = "makeitaccessible-reading-mode";
pub const COLOR_BLIND: &str = "makeitaccessible-colorblind";

/// Marker classes and whether each should be present for `settings`.
#[must_use]
pub fn marker_states(settings: &AccessibilitySettings) -> [(&'static str, bool); 5] {
    [
        (FONT_SCALED, settings.font_size != DEFAULT_FONT_SIZE),
        (HIGH_CONTRAST, settings.high_contrast),
        (DARK_MODE, settings.dark_mode),
        (READING_MODE, settings.reading_mode),
        (COLOR_BLIND, settings.color_blind_mode != ColorBlindMode::None),
    ]
}

/// Add or remove every marker class on `<html>` to match `settings`.
///
/// Other classes on `<html>` are left as they are.
pub fn apply_markers(document: &Document, settings: &AccessibilitySettings) {
    let html = document.select("html");
    for (class, present) in marker_states(settings) {
        dom::set_class(&html, class, present);
    }
}

/// CSS `filter` value for a color-blind mode.
#[must_use]
pub fn filter_for(mode: ColorBlindMode) -> &'static str {
    match mode {
        ColorBlindMode::None => "none",
        ColorBlindMode::Protanopia => "url(#protanopia)",
        ColorBlindMode::Deuteranopia => "url(#deuteranopia)",
        ColorBlindMode::Tritanopia => "url(#tritanopia)",
        ColorBlindMode::Achromatopsia => "grayscale(100%)",
    }
}

/// True for modes whose filter references inline SVG filter definitions.
#[must_use]
pub fn needs_svg_filters(mode: ColorBlindMode) -> bool {
    filter_for(mode).starts_with("url(")
}
