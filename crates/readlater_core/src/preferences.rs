use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 8..=28;
pub const FONT_SIZE_STEP: u32 = 1;
pub const LINE_HEIGHT_RANGE: RangeInclusive<u32> = 100..=300;
pub const MAX_WIDTH_RANGE: RangeInclusive<u32> = 40..=100;

/// Font families offered by the web reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WebFont {
    Inter,
    #[default]
    System,
    Merriweather,
    Lora,
    OpenSans,
    Roboto,
    CrimsonText,
    SourceSerifPro,
    OpenDyslexic,
}

impl WebFont {
    pub const ALL: [WebFont; 9] = [
        WebFont::Inter,
        WebFont::System,
        WebFont::Merriweather,
        WebFont::Lora,
        WebFont::OpenSans,
        WebFont::Roboto,
        WebFont::CrimsonText,
        WebFont::SourceSerifPro,
        WebFont::OpenDyslexic,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            WebFont::Inter => "Inter",
            WebFont::System => "System Default",
            WebFont::Merriweather => "Merriweather",
            WebFont::Lora => "Lora",
            WebFont::OpenSans => "Open Sans",
            WebFont::Roboto => "Roboto",
            WebFont::CrimsonText => "Crimson Text",
            WebFont::SourceSerifPro => "Source Serif Pro",
            WebFont::OpenDyslexic => "OpenDyslexic",
        }
    }

    /// Value handed to the reader's CSS `font-family`.
    pub fn css_family(self) -> &'static str {
        match self {
            WebFont::Inter => "Inter",
            WebFont::System => "system-ui",
            WebFont::Merriweather => "Merriweather",
            WebFont::Lora => "Lora",
            WebFont::OpenSans => "Open Sans",
            WebFont::Roboto => "Roboto",
            WebFont::CrimsonText => "Crimson Text",
            WebFont::SourceSerifPro => "Source Serif Pro",
            WebFont::OpenDyslexic => "OpenDyslexic",
        }
    }

    /// Parses either the display name or the CSS family, ignoring case.
    pub fn from_name(name: &str) -> Option<WebFont> {
        let name = name.trim();
        WebFont::ALL.into_iter().find(|font| {
            font.display_name().eq_ignore_ascii_case(name)
                || font.css_family().eq_ignore_ascii_case(name)
                || format!("{font:?}").eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for WebFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebPreferences {
    pub text_font_size: u32,
    /// Line height in percent of the font size.
    pub line_height: u32,
    pub max_width_percentage: u32,
    pub theme_key: String,
    pub font_family: WebFont,
    pub prefers_high_contrast_text: bool,
}

impl Default for WebPreferences {
    fn default() -> Self {
        Self {
            text_font_size: 12,
            line_height: 150,
            max_width_percentage: 100,
            theme_key: "Light".to_string(),
            font_family: WebFont::System,
            prefers_high_contrast_text: false,
        }
    }
}

impl WebPreferences {
    /// Returns a copy with every numeric field pulled into its allowed range.
    pub fn clamped(mut self) -> Self {
        self.text_font_size = clamp(self.text_font_size, &FONT_SIZE_RANGE);
        self.line_height = clamp(self.line_height, &LINE_HEIGHT_RANGE);
        self.max_width_percentage = clamp(self.max_width_percentage, &MAX_WIDTH_RANGE);
        if self.theme_key.trim().is_empty() {
            self.theme_key = WebPreferences::default().theme_key;
        }
        self
    }
}

pub(crate) fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_pulls_values_into_range() {
        let prefs = WebPreferences {
            text_font_size: 2,
            line_height: 900,
            max_width_percentage: 10,
            theme_key: "  ".to_string(),
            ..WebPreferences::default()
        }
        .clamped();

        assert_eq!(prefs.text_font_size, 8);
        assert_eq!(prefs.line_height, 300);
        assert_eq!(prefs.max_width_percentage, 40);
        assert_eq!(prefs.theme_key, "Light");
    }

    #[test]
    fn font_parses_display_and_css_names() {
        assert_eq!(WebFont::from_name("open sans"), Some(WebFont::OpenSans));
        assert_eq!(WebFont::from_name("system-ui"), Some(WebFont::System));
        assert_eq!(WebFont::from_name("OpenDyslexic"), Some(WebFont::OpenDyslexic));
        assert_eq!(WebFont::from_name("Comic Sans"), None);
    }
}
