//! Indexed text palette for the chat surfaces.

use ratatui::style::Color;

/// The stock 32-slot text palette. Slot 0 is the ordinary text color and
/// slot 6 is the whisper tint; ids outside the table fall back to slot 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPalette {
    colors: [Color; 32],
}

impl WindowPalette {
    /// Resolves a palette id to a concrete color.
    pub fn color(&self, id: u8) -> Color {
        self.colors
            .get(id as usize)
            .copied()
            .unwrap_or(self.colors[0])
    }
}

impl Default for WindowPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
        }
    }
}

const DEFAULT_COLORS: [Color; 32] = [
    Color::Rgb(0xff, 0xff, 0xff), // 0: ordinary text
    Color::Rgb(0x20, 0xa0, 0xd6),
    Color::Rgb(0xff, 0x78, 0x4c),
    Color::Rgb(0x66, 0xcc, 0x40),
    Color::Rgb(0x99, 0xcc, 0xff),
    Color::Rgb(0xcc, 0xc0, 0xff),
    Color::Rgb(0xff, 0xff, 0xa0), // 6: whispers
    Color::Rgb(0x80, 0x80, 0x80),
    Color::Rgb(0xc0, 0xc0, 0xc0),
    Color::Rgb(0x20, 0x80, 0xcc),
    Color::Rgb(0xff, 0x38, 0x10),
    Color::Rgb(0x00, 0xa0, 0x10),
    Color::Rgb(0x3e, 0x9a, 0xde),
    Color::Rgb(0xa0, 0x98, 0xff),
    Color::Rgb(0xff, 0xcc, 0x20),
    Color::Rgb(0x00, 0x00, 0x00),
    Color::Rgb(0x84, 0xaa, 0xff),
    Color::Rgb(0xff, 0xff, 0x40),
    Color::Rgb(0xff, 0x20, 0x20),
    Color::Rgb(0x20, 0x20, 0x40),
    Color::Rgb(0xe0, 0x80, 0x40),
    Color::Rgb(0xf0, 0xc0, 0x40),
    Color::Rgb(0x40, 0x80, 0xc0),
    Color::Rgb(0x40, 0xc0, 0xf0),
    Color::Rgb(0x80, 0xff, 0x80),
    Color::Rgb(0xc0, 0x80, 0x80),
    Color::Rgb(0x80, 0x80, 0xff),
    Color::Rgb(0xff, 0x80, 0xff),
    Color::Rgb(0x00, 0xa0, 0x40),
    Color::Rgb(0x00, 0xe0, 0x60),
    Color::Rgb(0xa0, 0x60, 0xe0),
    Color::Rgb(0xc0, 0x80, 0xff),
];
