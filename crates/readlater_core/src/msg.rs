#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked an explicit text size.
    FontSizeChanged(u32),
    /// User tapped the "A+" control.
    IncreaseFontSize,
    /// User tapped the "A-" control.
    DecreaseFontSize,
    /// User moved the line spacing slider (percent).
    LineHeightChanged(u32),
    /// User moved the margin slider (percent of the screen width).
    MaxWidthChanged(u32),
    /// User picked a theme by key.
    ThemeSelected(String),
    /// User picked a font family.
    FontSelected(crate::WebFont),
    /// User flipped the high contrast switch.
    HighContrastToggled(bool),
    /// User pressed Done.
    Confirmed,
    /// User tapped outside the dialog or pressed back.
    Dismissed,
}
