//! Greedy width fitting for a recipient line.
//!
//! Recipients are measured one at a time and kept while the running total stays
//! within the budget. The first recipient is always kept so the line is never
//! empty. Separator width (`", "`) is not counted toward the budget.

pub mod measure;

pub use measure::{BufferProbe, CellWidth, MeasureKind, TextMeasure};

/// Marker appended to the inline text when recipients were trimmed.
pub const TRIM_MARKER: &str = ", …";
pub const SEPARATOR: &str = ", ";

/// Where the recipient list was split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fit {
    /// Number of leading recipients that fit.
    pub shown: usize,
    /// Number of recipients left out.
    pub trimmed: usize,
}

pub struct FitCalculator<'m> {
    measure: &'m dyn TextMeasure,
}

impl<'m> FitCalculator<'m> {
    pub fn new(measure: &'m dyn TextMeasure) -> Self {
        Self { measure }
    }

    pub fn fit(&self, recipients: &[String], budget: usize) -> Fit {
        let mut total = 0usize;
        let mut shown = 0usize;

        for (index, recipient) in recipients.iter().enumerate() {
            let width = self.measure.width(recipient);
            if total + width <= budget || index == 0 {
                shown += 1;
                total += width;
            } else {
                return Fit {
                    shown,
                    trimmed: recipients.len() - index,
                };
            }
        }

        Fit { shown, trimmed: 0 }
    }
}

/// Derived view of the recipient line 🧮
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub displayed: Vec<String>,
    pub trimmed: usize,
    pub tooltip_visible: bool,
}

impl DisplayState {
    pub fn from_fit(recipients: &[String], fit: Fit, tooltip_visible: bool) -> Self {
        Self {
            displayed: recipients[..fit.shown].to_vec(),
            trimmed: fit.trimmed,
            tooltip_visible: tooltip_visible && fit.trimmed > 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    pub fn has_badge(&self) -> bool {
        self.trimmed > 0
    }

    /// `a, b` or `a, b, …` when something was trimmed.
    pub fn inline_text(&self) -> String {
        let mut text = self.displayed.join(SEPARATOR);
        if self.has_badge() {
            text.push_str(TRIM_MARKER);
        }
        text
    }

    pub fn badge_label(&self) -> Option<String> {
        self.has_badge().then(|| format!("+{}", self.trimmed))
    }
}
