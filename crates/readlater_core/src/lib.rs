//! Read-later core: pure reader-preferences dialog model and view-model helpers.
mod effect;
mod msg;
mod preferences;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use preferences::{
    WebFont, WebPreferences, FONT_SIZE_RANGE, FONT_SIZE_STEP, LINE_HEIGHT_RANGE, MAX_WIDTH_RANGE,
};
pub use state::{DialogPhase, PreferencesDialog};
pub use update::update;
pub use view_model::PreferencesViewModel;
