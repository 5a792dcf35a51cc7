use crossterm::event::{Event, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use recipients::app::config::UserConfig;
use recipients::app::events::AppEvent;
use recipients::app::{Action, App};
use recipients::ui;

/// Helper to create a test app instance
fn create_test_app(recipients: &[&str]) -> App {
    let config = UserConfig::default();
    App::new(&config, recipients.iter().map(|s| s.to_string()).collect())
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buf = terminal.backend().buffer();
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let height = terminal.backend().buffer().area.height;
    (0..height)
        .map(|y| row_text(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn hover(column: u16, row: u16) -> AppEvent {
    AppEvent::Input(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

#[test]
fn test_everything_fits() {
    let mut app = create_test_app(&["a@x.com", "b@x.com", "c@x.com"]);
    let mut terminal = Terminal::new(TestBackend::new(34, 8)).unwrap();
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();

    // 34 columns - 2 border - 6 badge = 26, room for the separators too
    assert_eq!(app.recipients.container_width(), Some(26));
    assert_eq!(app.recipients.state().trimmed, 0);
    assert!(row_text(&terminal, 1).contains("a@x.com, b@x.com, c@x.com"));
    assert!(!row_text(&terminal, 1).contains('…'));
    assert_eq!(app.recipients.badge_area(), None);
}

#[test]
fn test_overflow_badge_and_tooltip() {
    let mut app = create_test_app(&["a@x.com", "b@x.com", "c@x.com"]);
    // 19 text columns: two names (14) fit, three (21) do not
    let mut terminal = Terminal::new(TestBackend::new(27, 8)).unwrap();
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();

    let state = app.recipients.state().clone();
    assert_eq!(state.displayed, vec!["a@x.com", "b@x.com"]);
    assert_eq!(state.trimmed, 1);

    let line = row_text(&terminal, 1);
    assert!(line.contains("a@x.com, b@x.com, …"), "{line:?}");
    assert!(line.contains("+1"), "{line:?}");

    // Hover the badge
    let badge = app.recipients.badge_area().expect("badge drawn");
    assert_eq!(app.handle_event(hover(badge.x, badge.y)), Action::Redraw);
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();

    assert_eq!(
        app.recipients.tooltip_text().as_deref(),
        Some("a@x.com, b@x.com, c@x.com")
    );
    let screen = screen_text(&terminal);
    assert!(screen.contains("c@x.com"), "{screen}");

    // Leave the badge
    assert_eq!(app.handle_event(hover(0, 6)), Action::Redraw);
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();
    assert!(!screen_text(&terminal).contains("c@x.com"));
}

#[test]
fn test_tooltip_with_huge_recipient() {
    let huge = "x".repeat(65531);
    let mut app = create_test_app(&["a", &huge]);
    let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();
    assert_eq!(app.recipients.state().trimmed, 1);

    assert!(app.recipients.toggle_tooltip());
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();

    // Tooltip is clamped to the screen, one column in from the right edge
    let top = row_text(&terminal, 1);
    assert_eq!(top.chars().nth(1), Some('╭'), "{top:?}");
    assert_eq!(top.chars().nth(38), Some('╮'), "{top:?}");
    assert!(screen_text(&terminal).contains("xxxxxxxxxx"));
}

#[test]
fn test_single_oversized_recipient() {
    let mut app = create_test_app(&["a-very-long-name@example.com"]);
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();

    let state = app.recipients.state();
    assert_eq!(state.displayed.len(), 1);
    assert_eq!(state.trimmed, 0);
    assert!(row_text(&terminal, 1).contains("a-very-long"));
}

#[test]
fn test_empty_recipients() {
    let mut app = create_test_app(&[]);
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();

    assert!(app.recipients.state().is_empty());
    assert_eq!(app.recipients.badge_area(), None);
    assert_eq!(app.handle_event(hover(25, 1)), Action::None);
    assert_eq!(app.recipients.tooltip_text(), None);
    assert!(!row_text(&terminal, 1).contains('+'));
}

#[test]
fn test_resize_wider_clears_trim() {
    let mut app = create_test_app(&["a@x.com", "b@x.com", "c@x.com"]);
    let mut terminal = Terminal::new(TestBackend::new(25, 8)).unwrap();
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();
    assert_eq!(app.recipients.state().trimmed, 1);

    // The resize event alone already refits
    assert_eq!(app.handle_event(AppEvent::Resize(60, 8)), Action::Redraw);
    assert_eq!(app.recipients.state().trimmed, 0);

    terminal.backend_mut().resize(60, 8);
    terminal.draw(|f| ui::ui(f, &mut app)).unwrap();
    assert_eq!(app.recipients.state().trimmed, 0);
    assert!(row_text(&terminal, 1).contains("a@x.com, b@x.com, c@x.com"));
}
