//! Turns classified lines into styled segment runs.
//!
//! Layout is purely structural: it decides which pieces of text appear in
//! which order and with which style hints, but leaves measuring and drawing
//! to the render surface.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::palette::WindowPalette;
use super::span::{Segment, SegmentKind};
use crate::core::line::ChatLine;

/// The ordered segments produced for a single transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineLayout {
    pub segments: Vec<Segment>,
}

impl LineLayout {
    /// Concatenated text of every segment, in draw order.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

/// Lays out one classified line as its ordered segments.
///
/// Whispers get a tag segment ahead of the body and plain lines with a
/// sender get a `Name: ` segment; everything else is a single body segment
/// carrying the line's style hints.
pub fn layout_line(line: &ChatLine) -> LineLayout {
    let style = line.style();
    let mut segments = Vec::with_capacity(2);

    if let Some(prefix) = &style.prefix {
        segments.push(Segment::new(
            prefix.clone(),
            SegmentKind::WhisperTag,
            style.color_id,
            style.italic,
        ));
    }
    if let Some(sender) = line.sender() {
        segments.push(Segment::new(
            format!("{}: ", sender),
            SegmentKind::Sender,
            style.color_id,
            style.italic,
        ));
    }
    segments.push(Segment::new(
        line.body().to_string(),
        SegmentKind::Body,
        style.color_id,
        style.italic,
    ));

    LineLayout { segments }
}

/// Converts a layout into a ratatui line using the given palette.
pub fn to_ratatui_line(layout: &LineLayout, palette: &WindowPalette) -> Line<'static> {
    let spans: Vec<Span<'static>> = layout
        .segments
        .iter()
        .map(|segment| {
            let mut style = Style::default().fg(palette.color(segment.color_id));
            if segment.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }
            Span::styled(segment.text.clone(), style)
        })
        .collect();
    Line::from(spans)
}
