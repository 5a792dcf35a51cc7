pub mod recipients;

pub use recipients::RecipientsDisplay;

use std::path::Path;

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use super::config::UserConfig;
use super::events::AppEvent;
use super::keys::KeyConfig;
use super::source;
use crate::ui::layout;
use crate::ui::theme::Theme;

/// What the event loop should do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    Reload,
    Quit,
}

pub struct App {
    pub is_running: bool,
    pub recipients: RecipientsDisplay,
    pub theme: Theme,
    pub keys: KeyConfig,
    pub badge_width: u16,
}

impl App {
    pub fn new(config: &UserConfig, recipients: Vec<String>) -> Self {
        Self {
            is_running: true,
            recipients: RecipientsDisplay::new(config.measure.build()).with_recipients(recipients),
            theme: config.theme.clone(),
            keys: config.keys.clone(),
            badge_width: config.badge_width,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Action {
        match event {
            AppEvent::Resize(w, h) => {
                self.on_resize(w, h);
                Action::Redraw
            }
            AppEvent::RecipientsUpdate(list) => {
                debug!(count = list.len(), "recipients updated");
                self.recipients.set_recipients(list);
                Action::Redraw
            }
            AppEvent::Input(Event::Key(key)) => self.on_key(key),
            AppEvent::Input(Event::Mouse(mouse)) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    if self.recipients.on_hover(mouse.column, mouse.row) {
                        Action::Redraw
                    } else {
                        Action::None
                    }
                }
                _ => Action::None,
            },
            AppEvent::Input(Event::FocusLost) => {
                if self.recipients.on_hover_end() {
                    Action::Redraw
                } else {
                    Action::None
                }
            }
            AppEvent::Input(_) => Action::None,
        }
    }

    /// Work out the new container width from the terminal size right away,
    /// so the split is current before the next frame is drawn.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        let line = layout::get_recipient_layout(Rect::new(0, 0, width, height), self.badge_width);
        self.recipients.on_layout(line.text.width);
    }

    /// Re-read recipients (CLI ones first, then `file`) and apply them in place.
    /// Stdin cannot be read twice, so `-` is skipped. On failure the current
    /// list stays.
    pub fn reload(&mut self, cli_recipients: &[String], file: Option<&Path>) -> Action {
        let Some(path) = file.filter(|p| *p != Path::new("-")) else {
            info!("nothing to reload");
            return Action::None;
        };

        match source::collect(cli_recipients.to_vec(), Some(path)) {
            Ok(list) => self.handle_event(AppEvent::RecipientsUpdate(list)),
            Err(err) => {
                warn!(error = %err, "reload failed");
                Action::None
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }
        let keys = &self.keys;

        if keys.matches(key, &keys.quit) || keys.matches(key, &keys.quit_alt) {
            // Close the tooltip first, then quit
            if self.recipients.state().tooltip_visible {
                self.recipients.on_hover_end();
                return Action::Redraw;
            }
            self.is_running = false;
            return Action::Quit;
        }

        if keys.matches(key, &keys.reload) {
            return Action::Reload;
        }

        if keys.matches(key, &keys.toggle_tooltip) && self.recipients.toggle_tooltip() {
            return Action::Redraw;
        }

        Action::None
    }
}
