use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::fit::{DisplayState, FitCalculator, TextMeasure, SEPARATOR};

/// The recipient line component ✉️
///
/// Owns the recipient list and the derived [`DisplayState`]. The split is
/// recomputed when the list changes or when the renderer reports a new
/// container width. Until the first layout the width is unknown and
/// recomputation is skipped.
pub struct RecipientsDisplay {
    recipients: Vec<String>,
    measure: Box<dyn TextMeasure>,
    container_width: Option<u16>,
    state: DisplayState,
    badge_area: Option<Rect>,
}

impl RecipientsDisplay {
    pub fn new(measure: Box<dyn TextMeasure>) -> Self {
        Self {
            recipients: Vec::new(),
            measure,
            container_width: None,
            state: DisplayState::default(),
            badge_area: None,
        }
    }

    pub fn with_recipients(mut self, recipients: Vec<String>) -> Self {
        self.set_recipients(recipients);
        self
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn container_width(&self) -> Option<u16> {
        self.container_width
    }

    pub fn set_recipients(&mut self, recipients: Vec<String>) {
        self.recipients = recipients;
        self.recompute();
    }

    /// Called by the renderer with the width the text area actually got.
    /// Returns true when the width changed and the split was recomputed.
    pub fn on_layout(&mut self, width: u16) -> bool {
        if self.container_width == Some(width) {
            return false;
        }
        self.container_width = Some(width);
        self.recompute();
        true
    }

    pub fn recompute(&mut self) {
        let Some(width) = self.container_width else {
            return;
        };

        let fit = FitCalculator::new(self.measure.as_ref()).fit(&self.recipients, width as usize);
        debug!(
            width,
            total = self.recipients.len(),
            shown = fit.shown,
            trimmed = fit.trimmed,
            "recipients fitted"
        );
        self.state = DisplayState::from_fit(&self.recipients, fit, self.state.tooltip_visible);
        if !self.state.has_badge() {
            self.badge_area = None;
        }
    }

    /// Where the badge was drawn last frame, for hover hit-testing.
    pub fn set_badge_area(&mut self, area: Option<Rect>) {
        self.badge_area = area;
    }

    pub fn badge_area(&self) -> Option<Rect> {
        self.badge_area
    }

    /// Mouse moved to (column, row). The tooltip shows while the pointer is
    /// over the badge and hides when it leaves. Returns true if that changed.
    pub fn on_hover(&mut self, column: u16, row: u16) -> bool {
        let over_badge = self.state.has_badge()
            && self
                .badge_area
                .is_some_and(|area| area.contains(Position::new(column, row)));
        self.set_tooltip(over_badge)
    }

    /// Pointer left the terminal entirely.
    pub fn on_hover_end(&mut self) -> bool {
        self.set_tooltip(false)
    }

    pub fn toggle_tooltip(&mut self) -> bool {
        let visible = !self.state.tooltip_visible;
        self.set_tooltip(visible)
    }

    fn set_tooltip(&mut self, visible: bool) -> bool {
        let visible = visible && self.state.has_badge();
        let changed = self.state.tooltip_visible != visible;
        self.state.tooltip_visible = visible;
        changed
    }

    /// Full recipient list while the tooltip is showing, `None` otherwise.
    pub fn tooltip_text(&self) -> Option<String> {
        self.state
            .tooltip_visible
            .then(|| self.recipients.join(SEPARATOR))
    }

    /// Drop layout-derived state. Nothing is recomputed until the next `on_layout`.
    pub fn unmount(&mut self) {
        self.container_width = None;
        self.badge_area = None;
        self.state.tooltip_visible = false;
    }
}
