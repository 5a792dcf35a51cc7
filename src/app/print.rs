use ratatui::layout::Rect;

use super::config::UserConfig;
use super::state::RecipientsDisplay;
use crate::ui::layout;

/// One-shot rendering for `--print`: the fitted recipients followed by the
/// badge, as the UI would show them in a row `width` cells wide. The badge
/// column comes off the text budget just like in the UI layout.
pub fn fitted_line(config: &UserConfig, recipients: Vec<String>, width: u16) -> String {
    let row = Rect::new(0, 0, width, 1);
    let text = layout::split_row(row, config.badge_width).0;

    let mut display = RecipientsDisplay::new(config.measure.build()).with_recipients(recipients);
    display.on_layout(text.width);

    let state = display.state();
    match state.badge_label() {
        Some(badge) => format!("{}  {}", state.inline_text(), badge),
        None => state.inline_text(),
    }
}
