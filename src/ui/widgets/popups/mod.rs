use crate::app::App;
use ratatui::Frame;

pub mod tooltip;

pub fn render(f: &mut Frame, app: &App) {
    // RECIPIENTS TOOLTIP
    if app.recipients.state().tooltip_visible {
        tooltip::render(f, app);
    }
}
