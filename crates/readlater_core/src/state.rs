use crate::preferences::{clamp, FONT_SIZE_RANGE, LINE_HEIGHT_RANGE, MAX_WIDTH_RANGE};
use crate::view_model::PreferencesViewModel;
use crate::WebPreferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Open,
    Closed,
}

/// Editable state behind the reader preferences dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferencesDialog {
    phase: DialogPhase,
    draft: WebPreferences,
    dirty: bool,
}

impl PreferencesDialog {
    /// Opens the dialog seeded with the caller's current preferences.
    pub fn new(initial: WebPreferences) -> Self {
        Self {
            phase: DialogPhase::Open,
            draft: initial.clamped(),
            dirty: true,
        }
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Open
    }

    pub fn draft(&self) -> &WebPreferences {
        &self.draft
    }

    pub fn view(&self) -> PreferencesViewModel {
        PreferencesViewModel {
            phase: self.phase,
            text_font_size: self.draft.text_font_size,
            line_height: self.draft.line_height,
            max_width_percentage: self.draft.max_width_percentage,
            theme_key: self.draft.theme_key.clone(),
            font_family: self.draft.font_family,
            prefers_high_contrast_text: self.draft.prefers_high_contrast_text,
            can_increase_font: self.draft.text_font_size < *FONT_SIZE_RANGE.end(),
            can_decrease_font: self.draft.text_font_size > *FONT_SIZE_RANGE.start(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_font_size(&mut self, size: u32) {
        self.replace_if_changed(|draft| draft.text_font_size = clamp(size, &FONT_SIZE_RANGE));
    }

    pub(crate) fn set_line_height(&mut self, height: u32) {
        self.replace_if_changed(|draft| draft.line_height = clamp(height, &LINE_HEIGHT_RANGE));
    }

    pub(crate) fn set_max_width(&mut self, percentage: u32) {
        self.replace_if_changed(|draft| {
            draft.max_width_percentage = clamp(percentage, &MAX_WIDTH_RANGE)
        });
    }

    pub(crate) fn set_theme(&mut self, theme_key: String) {
        let theme_key = theme_key.trim().to_string();
        if theme_key.is_empty() {
            return;
        }
        self.replace_if_changed(|draft| draft.theme_key = theme_key);
    }

    pub(crate) fn set_font(&mut self, font: crate::WebFont) {
        self.replace_if_changed(|draft| draft.font_family = font);
    }

    pub(crate) fn set_high_contrast(&mut self, enabled: bool) {
        self.replace_if_changed(|draft| draft.prefers_high_contrast_text = enabled);
    }

    /// Closes the dialog and hands back the draft that was committed.
    pub(crate) fn close(&mut self, commit: bool) -> Option<WebPreferences> {
        self.phase = DialogPhase::Closed;
        self.dirty = true;
        commit.then(|| self.draft.clone())
    }

    fn replace_if_changed(&mut self, edit: impl FnOnce(&mut WebPreferences)) {
        let mut next = self.draft.clone();
        edit(&mut next);
        if next != self.draft {
            self.draft = next;
            self.dirty = true;
        }
    }
}
