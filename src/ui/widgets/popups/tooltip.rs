use crate::app::App;
use crate::fit::SEPARATOR;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Full recipient list, pinned to the top-right corner of the terminal 📌
/// Positioned against the whole frame, never the container, so it is not clipped by it.
pub fn render(f: &mut Frame, app: &App) {
    if !app.recipients.state().tooltip_visible {
        return;
    }
    let theme = &app.theme;
    let screen = f.area();

    let lines = wrap_recipients(app.recipients.recipients(), inner_limit(screen));
    let Some(area) = tooltip_area(screen, &lines) else {
        return;
    };
    f.render_widget(Clear, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.tooltip_fg).bg(theme.tooltip_bg))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.tooltip_bg));

    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.tooltip_fg).bg(theme.tooltip_bg))
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(paragraph, area);
}

/// Widest text row that fits on screen: border (2), padding (2) and a free column on each side.
fn inner_limit(screen: Rect) -> usize {
    screen.width.saturating_sub(2 + 4) as usize
}

/// Where the tooltip goes for these wrapped lines. Lines wider than the
/// screen are clamped and count once per row the paragraph wraps them into.
pub fn tooltip_area(screen: Rect, lines: &[String]) -> Option<Rect> {
    let max_inner = inner_limit(screen);
    if max_inner == 0 || lines.is_empty() {
        return None;
    }

    let inner_width = lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .clamp(1, max_inner);
    let rows: usize = lines
        .iter()
        .map(|l| l.width().div_ceil(inner_width).max(1))
        .sum();

    let width = u16::try_from(inner_width).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(screen.height.saturating_sub(1));
    let x = screen.x.saturating_add(screen.width.saturating_sub(width.saturating_add(1))); // Top-right fixed
    let y = screen.y.saturating_add(1).min(screen.bottom().saturating_sub(height));

    let area = Rect::new(x, y, width, height).intersection(screen);
    (!area.is_empty()).then_some(area)
}

/// Greedily pack `a, b, c` into lines no wider than `max_width`, breaking
/// after separators. A single recipient wider than a line gets a line of its
/// own and is wrapped by the paragraph.
pub fn wrap_recipients(recipients: &[String], max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, recipient) in recipients.iter().enumerate() {
        let mut piece = recipient.clone();
        if i + 1 < recipients.len() {
            piece.push_str(SEPARATOR.trim_end());
        }

        let candidate = if current.is_empty() {
            piece.width()
        } else {
            current.width() + 1 + piece.width()
        };

        if !current.is_empty() && candidate > max_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&piece);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_line_when_it_fits() {
        let lines = wrap_recipients(&list(&["a@x.com", "b@x.com", "c@x.com"]), 80);
        assert_eq!(lines, vec!["a@x.com, b@x.com, c@x.com"]);
    }

    #[test]
    fn test_breaks_after_separator() {
        let lines = wrap_recipients(&list(&["a@x.com", "b@x.com", "c@x.com"]), 17);
        assert_eq!(lines, vec!["a@x.com, b@x.com,", "c@x.com"]);
        // Joining the lines back gives the full list
        assert_eq!(lines.join(" "), "a@x.com, b@x.com, c@x.com");
    }

    #[test]
    fn test_oversized_recipient_alone() {
        let lines = wrap_recipients(&list(&["a", "a-very-long-recipient@x.com", "b"]), 10);
        assert_eq!(lines, vec!["a,", "a-very-long-recipient@x.com,", "b"]);
    }

    #[test]
    fn test_area_top_right() {
        let screen = Rect::new(0, 0, 27, 8);
        let lines = wrap_recipients(&list(&["a@x.com", "b@x.com", "c@x.com"]), inner_limit(screen));
        assert_eq!(tooltip_area(screen, &lines), Some(Rect::new(5, 1, 21, 4)));
    }

    #[test]
    fn test_area_with_huge_recipient_stays_on_screen() {
        let screen = Rect::new(0, 0, 40, 8);
        let huge = "x".repeat(65531);
        let lines = wrap_recipients(&list(&["a", &huge]), inner_limit(screen));

        let area = tooltip_area(screen, &lines).unwrap();
        assert_eq!(area.width, 38);
        assert_eq!(area.x, 1);
        assert_eq!(area.height, 7);
        assert_eq!(area.intersection(screen), area);
    }

    #[test]
    fn test_area_on_narrow_screen() {
        let lines = list(&["a@x.com"]);
        assert_eq!(tooltip_area(Rect::new(0, 0, 6, 8), &lines), None);
        assert_eq!(tooltip_area(Rect::new(0, 0, 40, 8), &[]), None);
    }

    #[test]
    fn test_empty() {
        assert!(wrap_recipients(&[], 10).is_empty());
    }
}
