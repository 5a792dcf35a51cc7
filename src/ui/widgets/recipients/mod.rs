use crate::app::App;
use crate::fit::{SEPARATOR, TRIM_MARKER};
use crate::ui::layout::RecipientLayout;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

pub mod badge;

/// Draw the "To" box with the fitted recipients, then the badge.
pub fn render(f: &mut Frame, layout: &RecipientLayout, app: &mut App) {
    // 1. Container
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.overlay))
        .title(Span::styled(
            " To ",
            Style::default()
                .fg(app.theme.overlay)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(block, layout.block);

    // 2. Recipient text
    let line = recipient_line(app);
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Left),
        layout.text,
    );

    // 3. Badge (remember where it landed for hover hit-testing)
    let badge_area = badge::render(f, layout.badge, app);
    app.recipients.set_badge_area(badge_area);
}

fn recipient_line(app: &App) -> Line<'static> {
    let state = app.recipients.state();
    let text_style = Style::default().fg(app.theme.text);
    let marker_style = Style::default().fg(app.theme.overlay);

    let mut spans = Vec::with_capacity(state.displayed.len() * 2 + 1);
    for (i, recipient) in state.displayed.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, marker_style));
        }
        spans.push(Span::styled(recipient.clone(), text_style));
    }
    if state.has_badge() {
        spans.push(Span::styled(TRIM_MARKER, marker_style));
    }

    Line::from(spans)
}
