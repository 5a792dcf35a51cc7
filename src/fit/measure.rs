use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Something that knows how wide a piece of text renders, in terminal cells 📏
pub trait TextMeasure {
    fn width(&self, text: &str) -> usize;
}

/// Column count straight from the Unicode width tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWidth;

impl TextMeasure for CellWidth {
    fn width(&self, text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }
}

/// Renders the text into a throwaway off-screen buffer and reads back how far
/// the cursor advanced. The buffer lives only for the duration of the call.
/// A buffer row holds at most `u16::MAX` cells, so longer text is measured
/// with [`CellWidth`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferProbe;

impl TextMeasure for BufferProbe {
    fn width(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }

        // Every cell needs at least one byte, so the byte length is a safe upper bound.
        let Ok(probe_width) = u16::try_from(text.len()) else {
            return CellWidth.width(text);
        };
        let mut scratch = Buffer::empty(Rect::new(0, 0, probe_width, 1));
        let (end_x, _) = scratch.set_stringn(0, 0, text, probe_width as usize, Style::default());
        end_x as usize
    }
}

/// Which measurer the app should use, as named in `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    #[default]
    Cells,
    Probe,
}

impl MeasureKind {
    pub fn build(self) -> Box<dyn TextMeasure> {
        match self {
            MeasureKind::Cells => Box::new(CellWidth),
            MeasureKind::Probe => Box::new(BufferProbe),
        }
    }
}
