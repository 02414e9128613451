use crate::WebPreferences;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The dialog closed; `None` means the user dismissed it without choosing.
    Close(Option<WebPreferences>),
}
