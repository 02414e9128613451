use crate::{DialogPhase, WebFont};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferencesViewModel {
    pub phase: DialogPhase,
    pub text_font_size: u32,
    pub line_height: u32,
    pub max_width_percentage: u32,
    pub theme_key: String,
    pub font_family: WebFont,
    pub prefers_high_contrast_text: bool,
    pub can_increase_font: bool,
    pub can_decrease_font: bool,
    pub dirty: bool,
}
