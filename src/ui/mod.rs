pub mod layout;
pub mod theme;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // 1. Layout
    let main_layout = layout::get_main_layout(area);
    let recipient_layout = layout::get_recipient_layout(area, app.badge_width);

    // 2. The text area's width is only known now; refit if it moved
    app.recipients.on_layout(recipient_layout.text.width);

    // 3. Recipients + badge
    widgets::recipients::render(f, &recipient_layout, app);

    // 4. Footer Hint
    let theme = &app.theme;
    let keys = &app.keys;
    let key_style = Style::default()
        .fg(theme.overlay)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::styled(format!(" {} ", keys.display(&keys.quit)), key_style),
        Span::styled("quit", Style::default().fg(theme.overlay)),
    ];
    if app.recipients.state().has_badge() {
        hint.push(Span::styled(
            format!("  {} ", keys.display(&keys.toggle_tooltip)),
            key_style,
        ));
        hint.push(Span::styled("all recipients", Style::default().fg(theme.overlay)));
    }
    let footer = Paragraph::new(Line::from(hint)).alignment(Alignment::Right);
    f.render_widget(footer, main_layout.footer_area);

    // 5. Render Popups (Overlays)
    widgets::popups::render(f, app);
}
