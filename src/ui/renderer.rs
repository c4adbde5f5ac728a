//! Frame rendering for the chat view.
//!
//! Window geometry arrives in surface pixels and is mapped onto terminal
//! cells here, one row per `font_size` pixels of height and one column per
//! half that. The transcript pane draws one history line per row, clipped
//! at the pane edge, with the newest lines kept in view.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::core::config::WindowRect;
use crate::core::session::ChatSession;
use crate::ui::layout::{layout_line, to_ratatui_line};
use crate::ui::palette::WindowPalette;

fn clamp_u16(value: u32) -> u16 {
    value.min(u16::MAX as u32) as u16
}

/// Maps a pixel rect onto terminal cells, clipped to the frame.
pub fn cell_rect(window: &WindowRect, font_size: u32, frame: Rect) -> Rect {
    let cell_w = (font_size / 2).max(1);
    let cell_h = font_size.max(1);
    let mapped = Rect::new(
        clamp_u16(window.x / cell_w),
        clamp_u16(window.y / cell_h),
        clamp_u16(window.width / cell_w),
        clamp_u16(window.height / cell_h),
    );
    mapped.intersection(frame)
}

/// Rows available for transcript lines once the title row is spent.
pub fn transcript_view_height(chat: Rect) -> u16 {
    chat.height.saturating_sub(1)
}

/// Highest top-row offset that still fills the view.
pub fn max_scroll_offset(total_lines: usize, view_height: u16) -> u16 {
    let total = total_lines.min(u16::MAX as usize) as u16;
    total.saturating_sub(view_height)
}

/// Draws one frame: the transcript pane, the input box, and the terminal
/// cursor when the composer is open.
///
/// `scroll_back` counts lines up from the newest; 0 keeps the view pinned
/// to the latest line.
pub fn ui(f: &mut Frame, session: &ChatSession, palette: &WindowPalette, scroll_back: u16) {
    let config = session.config();
    let chat = cell_rect(&config.chat_window, config.font_size, f.area());
    let input = cell_rect(&config.input_box, config.font_size, f.area());

    let lines: Vec<Line> = session
        .history()
        .iter()
        .map(|line| to_ratatui_line(&layout_line(line), palette))
        .collect();

    let view_height = transcript_view_height(chat);
    let max_offset = max_scroll_offset(lines.len(), view_height);
    let offset = max_offset.saturating_sub(scroll_back.min(max_offset));

    let transcript = Paragraph::new(lines)
        .block(Block::default().title("causerie"))
        .scroll((offset, 0));
    f.render_widget(transcript, chat);

    if input.width == 0 || input.height == 0 {
        return;
    }

    let (text, cursor_col) = match session.composer() {
        Some(composer) => (composer.text().to_string(), Some(composer.cursor_column())),
        None => (String::new(), None),
    };

    // Scroll the input text horizontally so the cursor stays on screen.
    let h_scroll = match cursor_col {
        Some(col) if col >= input.width => col - (input.width - 1),
        _ => 0,
    };

    let input_box = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::UNDERLINED))
        .scroll((0, h_scroll));
    f.render_widget(input_box, input);

    if let Some(col) = cursor_col {
        let x = input.x + (col - h_scroll).min(input.width.saturating_sub(1));
        f.set_cursor_position((x, input.y));
    }
}
