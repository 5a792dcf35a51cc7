use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;

pub struct MainLayout {
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Footer needs 1 line at the bottom always.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        body_area: chunks[0],
        footer_area: chunks[1],
    }
}

/// The bordered "To" box and the single row inside it, split into the
/// recipient text on the left and the badge column on the right.
pub struct RecipientLayout {
    pub block: Rect,
    pub text: Rect,
    pub badge: Rect,
}

pub fn get_recipient_layout(area: Rect, badge_width: u16) -> RecipientLayout {
    let body = get_main_layout(area).body_area;
    let block = Rect {
        height: body.height.min(3),
        ..body
    };

    let inner = Block::bordered().inner(block);
    let row = Rect {
        height: inner.height.min(1),
        ..inner
    };

    let (text, badge) = split_row(row, badge_width);

    RecipientLayout { block, text, badge }
}

/// Split one row into (recipient text, badge column).
pub fn split_row(row: Rect, badge_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),              // Recipients
            Constraint::Length(badge_width), // Badge
        ])
        .split(row);

    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_leaves_room_for_badge() {
        let line = get_recipient_layout(Rect::new(0, 0, 40, 10), 6);
        assert_eq!(line.block, Rect::new(0, 0, 40, 3));
        // 2 border columns and 6 badge columns
        assert_eq!(line.text, Rect::new(1, 1, 32, 1));
        assert_eq!(line.badge, Rect::new(33, 1, 6, 1));
    }

    #[test]
    fn test_tiny_terminal() {
        let line = get_recipient_layout(Rect::new(0, 0, 1, 1), 6);
        assert_eq!(line.text.width, 0);
        assert_eq!(line.text.height, 0);
    }
}
