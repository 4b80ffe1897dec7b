//! Accessibility settings and the messages that change them.
//!
//! Settings are stored as a flat camelCase JSON object. Messages carry an
//! action name plus an optional partial settings object under `data.state`,
//! which is merged key by key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest font scale, in percent.
pub const MIN_FONT_SIZE: u16 = 50;
/// Largest font scale, in percent.
pub const MAX_FONT_SIZE: u16 = 200;
/// Unscaled text.
pub const DEFAULT_FONT_SIZE: u16 = 100;
/// Step used by the keyboard shortcut.
pub const FONT_SIZE_STEP: i32 = 10;

/// Color-vision simulation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBlindMode {
    #[default]
    None,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl ColorBlindMode {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }
}

impl fmt::Display for ColorBlindMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorBlindMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::Settings(format!("unknown color blind mode: {s}")))
    }
}

/// On/off features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    HighContrast,
    DarkMode,
    ReadingMode,
    Tts,
    ReadingGuide,
}

/// Persisted accessibility settings.
///
/// Missing keys take their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    /// Text scale in percent, 50..=200.
    pub font_size: u16,
    pub high_contrast: bool,
    pub dark_mode: bool,
    pub reading_mode: bool,
    pub tts: bool,
    pub reading_guide: bool,
    pub color_blind_mode: ColorBlindMode,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            high_contrast: false,
            dark_mode: false,
            reading_mode: false,
            tts: false,
            reading_guide: false,
            color_blind_mode: ColorBlindMode::None,
        }
    }
}

impl AccessibilitySettings {
    /// Parse stored settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Settings`] for malformed JSON or wrongly typed values.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.font_size = clamp_font_size(i32::from(settings.font_size));
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns [`Error::Settings`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Change the font scale by `delta` percent, clamped to 50..=200.
    pub fn adjust_font_size(&mut self, delta: i32) -> u16 {
        self.font_size = clamp_font_size(i32::from(self.font_size) + delta);
        self.font_size
    }

    #[must_use]
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::HighContrast => self.high_contrast,
            Feature::DarkMode => self.dark_mode,
            Feature::ReadingMode => self.reading_mode,
            Feature::Tts => self.tts,
            Feature::ReadingGuide => self.reading_guide,
        }
    }

    pub fn set_enabled(&mut self, feature: Feature, enabled: bool) {
        let flag = match feature {
            Feature::HighContrast => &mut self.high_contrast,
            Feature::DarkMode => &mut self.dark_mode,
            Feature::ReadingMode => &mut self.reading_mode,
            Feature::Tts => &mut self.tts,
            Feature::ReadingGuide => &mut self.reading_guide,
        };
        *flag = enabled;
    }

    /// Flip a feature and return its new value.
    pub fn toggle(&mut self, feature: Feature) -> bool {
        let enabled = !self.is_enabled(feature);
        self.set_enabled(feature, enabled);
        enabled
    }

    /// Features counted on the toolbar badge. The reading guide is not one.
    #[must_use]
    pub fn active_feature_count(&self) -> usize {
        [self.high_contrast, self.dark_mode, self.reading_mode, self.tts]
            .into_iter()
            .filter(|on| *on)
            .count()
    }

    /// Badge label: the active feature count, or empty when nothing is on.
    #[must_use]
    pub fn badge_text(&self) -> String {
        match self.active_feature_count() {
            0 => String::new(),
            n => n.to_string(),
        }
    }

    /// Merge a partial settings object. Absent keys are left alone.
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(size) = patch.font_size {
            self.font_size = clamp_font_size(i32::from(size));
        }
        if let Some(mode) = patch.color_blind_mode {
            self.color_blind_mode = mode;
        }
        let flags = [
            (Feature::HighContrast, patch.high_contrast),
            (Feature::DarkMode, patch.dark_mode),
            (Feature::ReadingMode, patch.reading_mode),
            (Feature::Tts, patch.tts),
            (Feature::ReadingGuide, patch.reading_guide),
        ];
        for (feature, value) in flags {
            if let Some(enabled) = value {
                self.set_enabled(feature, enabled);
            }
        }
    }

    /// Apply an incoming message's `data.state`, if any.
    ///
    /// Returns `true` when the message carried settings.
    pub fn apply_message(&mut self, message: &Message) -> bool {
        match message.data.as_ref().and_then(|data| data.state.as_ref()) {
            Some(state) => {
                self.merge(state);
                true
            }
            None => false,
        }
    }

    /// Run a keyboard command and build the message that tells the page.
    pub fn apply_command(&mut self, command: Command) -> Message {
        let state = match command {
            Command::ToggleHighContrast => SettingsPatch {
                high_contrast: Some(self.toggle(Feature::HighContrast)),
                ..SettingsPatch::default()
            },
            Command::ToggleDarkMode => SettingsPatch {
                dark_mode: Some(self.toggle(Feature::DarkMode)),
                ..SettingsPatch::default()
            },
            Command::IncreaseFontSize => SettingsPatch {
                font_size: Some(self.adjust_font_size(FONT_SIZE_STEP)),
                ..SettingsPatch::default()
            },
        };
        Message::with_state(command.action(), state)
    }
}

fn clamp_font_size(size: i32) -> u16 {
    let clamped = size.clamp(i32::from(MIN_FONT_SIZE), i32::from(MAX_FONT_SIZE));
    u16::try_from(clamped).unwrap_or(DEFAULT_FONT_SIZE)
}

/// A partial [`AccessibilitySettings`], as sent in `data.state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_guide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_blind_mode: Option<ColorBlindMode>,
}

/// Message action names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    ToggleHighContrast,
    ToggleDarkMode,
    ToggleReadingMode,
    ToggleReadingGuide,
    UpdateFontSize,
    UpdateColorBlindMode,
    #[serde(rename = "toggleTTS")]
    ToggleTts,
    SpeakText,
    UpdateContextMenu,
}

/// Message payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SettingsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_selection: Option<bool>,
}

/// A message between the popup, the background worker and the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
    /// Text to speak; `speakText` sent to the page carries it here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// `updateContextMenu` from the page carries it here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_selection: Option<bool>,
}

impl Message {
    #[must_use]
    pub fn new(action: Action) -> Self {
        Self {
            action,
            data: None,
            text: None,
            has_selection: None,
        }
    }

    #[must_use]
    pub fn with_state(action: Action, state: SettingsPatch) -> Self {
        Self {
            action,
            data: Some(MessageData {
                state: Some(state),
                ..MessageData::default()
            }),
            text: None,
            has_selection: None,
        }
    }

    /// `speakText` for the page.
    #[must_use]
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            action: Action::SpeakText,
            data: None,
            text: Some(text.into()),
            has_selection: None,
        }
    }

    /// Text to speak, wherever the sender put it.
    #[must_use]
    pub fn speech_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .or_else(|| self.data.as_ref().and_then(|data| data.text.as_deref()))
    }

    /// `updateContextMenu` for the page's current text selection.
    #[must_use]
    pub fn context_menu(has_selection: bool) -> Self {
        Self {
            has_selection: Some(has_selection),
            ..Self::new(Action::UpdateContextMenu)
        }
    }

    /// Whether the page has selected text, wherever the sender put it.
    #[must_use]
    pub fn selection_state(&self) -> Option<bool> {
        self.has_selection
            .or_else(|| self.data.as_ref().and_then(|data| data.has_selection))
    }

    /// # Errors
    ///
    /// Returns [`Error::Settings`] for malformed JSON or an unknown action.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`Error::Settings`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    ToggleHighContrast,
    ToggleDarkMode,
    IncreaseFontSize,
}

impl Command {
    /// Action sent to the page after the command runs.
    #[must_use]
    pub fn action(self) -> Action {
        match self {
            Self::ToggleHighContrast => Action::ToggleHighContrast,
            Self::ToggleDarkMode => Action::ToggleDarkMode,
            Self::IncreaseFontSize => Action::UpdateFontSize,
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "toggle-high-contrast" => Ok(Self::ToggleHighContrast),
            "toggle-dark-mode" => Ok(Self::ToggleDarkMode),
            "increase-font-size" => Ok(Self::IncreaseFontSize),
            other => Err(Error::Settings(format!("unknown command: {other}"))),
        }
    }
}
