#![allow(clippy::unwrap_used)]

use accessible_reader::markers::{self, apply_markers, filter_for};
use accessible_reader::selector::utils;
use accessible_reader::settings::{Action, Command, Feature, Message};
use accessible_reader::{dom, speech, AccessibilitySettings, ColorBlindMode, Error};

#[test]
fn stored_settings_round_trip_through_json() {
    let stored = r#"{
        "fontSize": 130,
        "highContrast": true,
        "darkMode": false,
        "readingMode": true,
        "tts": false,
        "readingGuide": true,
        "colorBlindMode": "protanopia"
    }"#;

    let settings = AccessibilitySettings::from_json(stored).unwrap();
    assert_eq!(settings.font_size, 130);
    assert!(settings.reading_guide);
    assert_eq!(settings.color_blind_mode, ColorBlindMode::Protanopia);

    let again = AccessibilitySettings::from_json(&settings.to_json().unwrap()).unwrap();
    assert_eq!(again, settings);
}

#[test]
fn empty_object_is_the_install_default() {
    let settings = AccessibilitySettings::from_json("{}").unwrap();
    assert_eq!(settings, AccessibilitySettings::default());
}

#[test]
fn malformed_settings_are_reported() {
    assert!(matches!(
        AccessibilitySettings::from_json("not json"),
        Err(Error::Settings(_))
    ));
}

#[test]
fn popup_font_buttons_stay_in_range() {
    let mut settings = AccessibilitySettings::default();
    for _ in 0..20 {
        settings.adjust_font_size(10);
    }
    assert_eq!(settings.font_size, 200);

    for _ in 0..30 {
        settings.adjust_font_size(-10);
    }
    assert_eq!(settings.font_size, 50);
}

#[test]
fn badge_counts_four_features() {
    let mut settings = AccessibilitySettings::default();
    settings.toggle(Feature::ReadingGuide);
    assert_eq!(settings.badge_text(), "");

    for feature in [Feature::HighContrast, Feature::DarkMode, Feature::ReadingMode, Feature::Tts] {
        settings.toggle(feature);
    }
    assert_eq!(settings.badge_text(), "4");
}

#[test]
fn background_messages_update_settings() {
    let mut settings = AccessibilitySettings::default();

    let incoming = [
        r#"{"action":"toggleDarkMode","data":{"state":{"darkMode":true}}}"#,
        r#"{"action":"updateFontSize","data":{"state":{"fontSize":150}}}"#,
        r#"{"action":"updateColorBlindMode","data":{"state":{"colorBlindMode":"achromatopsia"}}}"#,
        r#"{"action":"updateContextMenu","data":{"hasSelection":true}}"#,
    ];
    for json in incoming {
        settings.apply_message(&Message::from_json(json).unwrap());
    }

    assert!(settings.dark_mode);
    assert_eq!(settings.font_size, 150);
    assert_eq!(settings.color_blind_mode, ColorBlindMode::Achromatopsia);
    assert!(!settings.high_contrast);
}

#[test]
fn keyboard_commands_produce_page_messages() {
    let mut settings = AccessibilitySettings::default();

    let message = settings.apply_command("toggle-high-contrast".parse::<Command>().unwrap());
    assert_eq!(message.action, Action::ToggleHighContrast);

    // The page applies the same message and ends up in the same state.
    let mut page = AccessibilitySettings::default();
    assert!(page.apply_message(&message));
    assert_eq!(page, settings);
}

#[test]
fn markers_reflect_settings_on_the_page() {
    let doc = dom::parse("<html><body><p>x</p></body></html>");
    let html = doc.select("html");
    let settings = AccessibilitySettings {
        font_size: 90,
        reading_mode: true,
        color_blind_mode: ColorBlindMode::Tritanopia,
        ..AccessibilitySettings::default()
    };

    apply_markers(&doc, &settings);

    assert!(utils::has_class_token(&html, markers::FONT_SCALED));
    assert!(utils::has_class_token(&html, markers::READING_MODE));
    assert!(utils::has_class_token(&html, markers::COLOR_BLIND));
    assert_eq!(filter_for(settings.color_blind_mode), "url(#tritanopia)");

    apply_markers(&doc, &AccessibilitySettings::default());
    assert_eq!(dom::class_name(&html), None);
}

#[test]
fn speech_reads_the_article_only() {
    let doc = dom::parse(r#"
        <body>
            <nav>Home About</nav>
            <article>
                <h1>Headline</h1>
                <p>First sentence.</p>
                <aside>Pull quote</aside>
                <p class="ad-note">Sponsored</p>
                <p>Last sentence.</p>
            </article>
        </body>
    "#);

    assert_eq!(speech::page_text(&doc), "Headline First sentence. Last sentence.");
}

#[test]
fn speak_message_carries_selection() {
    let selected = speech::speakable_selection("  read this  ").unwrap();
    let message = Message::speak(selected);

    assert_eq!(message.action, Action::SpeakText);
    assert_eq!(message.speech_text(), Some("read this"));
    assert!(speech::speakable_selection("   ").is_none());
}
