use anyhow::anyhow;
use readlater_core::{update, Effect, Msg, PreferencesDialog, WebFont, WebPreferences};

use crate::cli::Prefs;

/// Replays the requested edits through the preferences dialog.
///
/// Returns what the dialog hands back on close: `None` when dismissed.
pub fn edit(initial: WebPreferences, args: &Prefs) -> anyhow::Result<Option<WebPreferences>> {
    let mut msgs = Vec::new();
    if let Some(size) = args.font_size {
        msgs.push(Msg::FontSizeChanged(size));
    }
    if let Some(height) = args.line_height {
        msgs.push(Msg::LineHeightChanged(height));
    }
    if let Some(width) = args.max_width {
        msgs.push(Msg::MaxWidthChanged(width));
    }
    if let Some(theme) = &args.theme {
        msgs.push(Msg::ThemeSelected(theme.clone()));
    }
    if let Some(name) = &args.font {
        let font = WebFont::from_name(name).ok_or_else(|| anyhow!("unknown font {name:?}"))?;
        msgs.push(Msg::FontSelected(font));
    }
    if let Some(enabled) = args.high_contrast {
        msgs.push(Msg::HighContrastToggled(enabled));
    }
    msgs.push(if args.dismiss {
        Msg::Dismissed
    } else {
        Msg::Confirmed
    });

    let mut state = PreferencesDialog::new(initial);
    for msg in msgs {
        let (next, effects) = update(state, msg);
        state = next;
        if let Some(Effect::Close(result)) = effects.into_iter().next() {
            return Ok(result);
        }
    }
    Err(anyhow!("preferences dialog did not close"))
}
