use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Right-aligned `+N` pill. Returns the cells it covers, or `None` when
/// nothing was trimmed and no badge is drawn.
pub fn render(f: &mut Frame, area: Rect, app: &App) -> Option<Rect> {
    let label = app.recipients.state().badge_label()?;
    if area.is_empty() {
        return None;
    }

    let text = format!(" {} ", label);
    let width = (text.width() as u16).min(area.width);
    let badge_area = Rect {
        x: area.right().saturating_sub(width),
        width,
        height: 1,
        ..area
    };

    let style = Style::default()
        .fg(app.theme.badge_fg)
        .bg(app.theme.badge_bg)
        .add_modifier(Modifier::BOLD);
    f.render_widget(Paragraph::new(Span::styled(text, style)), badge_area);

    Some(badge_area)
}
