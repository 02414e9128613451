use crate::{Effect, Msg, PreferencesDialog, FONT_SIZE_STEP};

/// Pure update function: applies a message to the dialog and returns any effects.
///
/// Once the dialog has closed every message is ignored, so `Effect::Close`
/// is emitted at most once per dialog.
pub fn update(mut state: PreferencesDialog, msg: Msg) -> (PreferencesDialog, Vec<Effect>) {
    if !state.is_open() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::FontSizeChanged(size) => {
            state.set_font_size(size);
            Vec::new()
        }
        Msg::IncreaseFontSize => {
            let size = state.draft().text_font_size.saturating_add(FONT_SIZE_STEP);
            state.set_font_size(size);
            Vec::new()
        }
        Msg::DecreaseFontSize => {
            let size = state.draft().text_font_size.saturating_sub(FONT_SIZE_STEP);
            state.set_font_size(size);
            Vec::new()
        }
        Msg::LineHeightChanged(height) => {
            state.set_line_height(height);
            Vec::new()
        }
        Msg::MaxWidthChanged(percentage) => {
            state.set_max_width(percentage);
            Vec::new()
        }
        Msg::ThemeSelected(theme_key) => {
            state.set_theme(theme_key);
            Vec::new()
        }
        Msg::FontSelected(font) => {
            state.set_font(font);
            Vec::new()
        }
        Msg::HighContrastToggled(enabled) => {
            state.set_high_contrast(enabled);
            Vec::new()
        }
        Msg::Confirmed => vec![Effect::Close(state.close(true))],
        Msg::Dismissed => vec![Effect::Close(state.close(false))],
    };

    (state, effects)
}
