//! Label measurement collaborators.
//!
//! Glyph sizing only needs the footprint of a node's label text; painting the
//! label belongs to the host application. The [`LabelMeasurer`] trait is the
//! contract the shape scaffolding consumes, [`TextMeasurer`] is the
//! font-metrics backed implementation, and [`FixedMeasurer`] provides
//! deterministic metrics for tests and metric overrides.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use std::sync::{Arc, Mutex};

use crate::geometry::Size;

/// Synchronous text measurement, side-effect-free from the shape's
/// perspective. The same measurer is typically shared by every node in a
/// network.
pub trait LabelMeasurer {
    /// Returns the width and height the given text occupies at `font_size`
    /// (in pixels).
    fn measure(&mut self, text: &str, font_size: f32) -> Size;
}

/// Label measurement backed by real font metrics and shaping.
///
/// Maintains a reusable FontSystem instance to avoid expensive recreation.
pub struct TextMeasurer {
    font_system: Arc<Mutex<FontSystem>>,
}

impl Default for TextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer {
    pub fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }
}

impl LabelMeasurer for TextMeasurer {
    fn measure(&mut self, text: &str, font_size: f32) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().unwrap();

        let line_height = font_size * 1.2;
        let metrics = Metrics::new(font_size, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::SansSerif);

        // Unlimited buffer size so the text flows naturally.
        buffer.set_size(None, None);

        // Advanced shaping handles ligatures, kerning, etc.
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        // Scan layout runs for the rightmost glyph to determine the actual
        // rendered size.
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            // Rough estimate when shaping produced nothing.
            max_width = text.len() as f32 * (font_size * 0.6);
            total_height = metrics.line_height;
        } else {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        Size::new(max_width, total_height)
    }
}

/// Deterministic per-character metrics.
///
/// Every character is `advance * font_size` wide and a line is
/// `1.2 * font_size` tall. Useful in tests and wherever reproducible glyph
/// footprints matter more than typographic accuracy.
#[derive(Debug, Clone)]
pub struct FixedMeasurer {
    advance: f32,
}

impl FixedMeasurer {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for FixedMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl LabelMeasurer for FixedMeasurer {
    fn measure(&mut self, text: &str, font_size: f32) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let longest_line = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let line_count = text.lines().count().max(1);
        Size::new(
            longest_line as f32 * self.advance * font_size,
            line_count as f32 * font_size * 1.2,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_fixed_measurer_scales_with_text_and_font() {
        let mut measurer = FixedMeasurer::new(0.5);

        let size = measurer.measure("abcd", 10.0);
        assert_approx_eq!(f32, size.width(), 20.0);
        assert_approx_eq!(f32, size.height(), 12.0);

        let larger = measurer.measure("abcd", 20.0);
        assert!(larger.width() > size.width());
    }

    #[test]
    fn test_fixed_measurer_multiline() {
        let mut measurer = FixedMeasurer::new(0.5);

        let size = measurer.measure("ab\ncdef", 10.0);
        // Width follows the longest line, height counts both lines.
        assert_approx_eq!(f32, size.width(), 20.0);
        assert_approx_eq!(f32, size.height(), 24.0);
    }

    #[test]
    fn test_fixed_measurer_empty_text() {
        let mut measurer = FixedMeasurer::default();
        assert!(measurer.measure("", 14.0).is_zero());
    }

    #[test]
    fn test_text_measurer_nonzero_for_text() {
        let mut measurer = TextMeasurer::new();
        let size = measurer.measure("agent", 14.0);
        assert!(size.width() > 0.0);
        assert!(size.height() > 0.0);
    }
}
