//! Drawing boundary between line layout and a concrete back-end.
//!
//! A [`RenderSurface`] knows how to measure and paint text in its own units
//! (pixels, terminal cells, whatever). [`draw_line`] walks a layout across
//! one, advancing a pen past each prefix segment and handing the final
//! segment whatever width is left.

use super::span::Segment;
use crate::ui::layout::LineLayout;

/// Style hints attached to a single draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color_id: u8,
    pub italic: bool,
}

impl From<&Segment> for TextStyle {
    fn from(segment: &Segment) -> Self {
        Self {
            color_id: segment.color_id,
            italic: segment.italic,
        }
    }
}

/// Measure-and-paint contract a front-end implements.
pub trait RenderSurface {
    /// Width of `text` in this surface's horizontal units.
    fn measure_width(&self, text: &str) -> u32;

    /// Paints `text` at `(x, y)`, constrained to `max_width` units.
    fn draw_text(&mut self, text: &str, x: u32, y: u32, max_width: u32, style: TextStyle);
}

/// Draws one laid-out line at `(x, y)` within `max_width` units.
///
/// Prefix segments (whisper tag, sender) are drawn at their measured width
/// and advance the pen; the final segment takes the rest of the line.
pub fn draw_line(
    surface: &mut dyn RenderSurface,
    layout: &LineLayout,
    x: u32,
    y: u32,
    max_width: u32,
) {
    let Some((last, prefixes)) = layout.segments.split_last() else {
        return;
    };
    let right = x.saturating_add(max_width);
    let mut pen = x;
    for segment in prefixes {
        let width = surface.measure_width(&segment.text);
        surface.draw_text(&segment.text, pen, y, width, TextStyle::from(segment));
        pen = pen.saturating_add(width);
    }
    let remaining = right.saturating_sub(pen);
    surface.draw_text(&last.text, pen, y, remaining, TextStyle::from(last));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::layout_line;
    use crate::utils::test_utils::classified;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct DrawCall {
        text: String,
        x: u32,
        y: u32,
        max_width: u32,
        style: TextStyle,
    }

    /// Surface that records draw calls; every character measures 8 units.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl RenderSurface for RecordingSurface {
        fn measure_width(&self, text: &str) -> u32 {
            text.chars().count() as u32 * 8
        }

        fn draw_text(&mut self, text: &str, x: u32, y: u32, max_width: u32, style: TextStyle) {
            self.calls.push(DrawCall {
                text: text.to_string(),
                x,
                y,
                max_width,
                style,
            });
        }
    }

    #[test]
    fn sender_advances_the_pen_before_the_body() {
        let mut surface = RecordingSurface::default();
        draw_line(&mut surface, &layout_line(&classified("Alice: hi")), 0, 0, 400);

        assert_eq!(surface.calls.len(), 2);
        assert_eq!(surface.calls[0].text, "Alice: ");
        assert_eq!(surface.calls[0].x, 0);
        assert_eq!(surface.calls[0].max_width, 56);
        assert_eq!(surface.calls[1].text, " hi");
        assert_eq!(surface.calls[1].x, 56);
        assert_eq!(surface.calls[1].max_width, 344);
    }

    #[test]
    fn whisper_tag_is_painted_ahead_of_the_body() {
        let mut surface = RecordingSurface::default();
        draw_line(&mut surface, &layout_line(&classified("/w psst")), 10, 3, 200);

        assert_eq!(surface.calls[0].text, "[Whisper] ");
        assert_eq!(surface.calls[0].x, 10);
        assert_eq!(surface.calls[0].y, 3);
        assert_eq!(surface.calls[1].x, 10 + 80);
        assert_eq!(surface.calls[1].max_width, 120);
        assert_eq!(surface.calls[1].style.color_id, 6);
    }

    #[test]
    fn single_segment_lines_take_the_full_width() {
        let mut surface = RecordingSurface::default();
        draw_line(&mut surface, &layout_line(&classified("/me waves")), 0, 0, 400);

        assert_eq!(surface.calls.len(), 1);
        assert_eq!(surface.calls[0].max_width, 400);
        assert!(surface.calls[0].style.italic);
    }

    #[test]
    fn overlong_prefixes_leave_the_body_no_width() {
        let mut surface = RecordingSurface::default();
        draw_line(&mut surface, &layout_line(&classified("Annabelle: y")), 0, 0, 40);

        // "Annabelle: " measures 88, past the 40-unit line.
        assert_eq!(surface.calls[1].max_width, 0);
    }

    #[test]
    fn empty_layouts_paint_nothing() {
        let mut surface = RecordingSurface::default();
        draw_line(&mut surface, &LineLayout::default(), 0, 0, 400);
        assert!(surface.calls.is_empty());
    }
}
