//! Terminal event loop for the chat view.
//!
//! Owns the raw-mode and alternate-screen lifecycle, polls input on a 50ms
//! cadence, and routes keys between the composer, the transport, and the
//! scroll position.

use std::error::Error;
use std::io;
use std::time::Duration;

use ratatui::crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Rect;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use crate::core::config::ChatConfig;
use crate::core::session::ChatSession;
use crate::transport::{ChatTransport, LocalEcho};
use crate::ui::palette::WindowPalette;
use crate::ui::renderer::{cell_rect, transcript_view_height, ui};

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the chat view over a local echo transport until the user leaves
/// with Esc or Ctrl+C.
pub fn run_chat(config: ChatConfig) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = ChatSession::new(config);
    session.open();
    debug!("chat view opened");

    let result = run_loop(&mut terminal, &mut session, LocalEcho::new());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut ChatSession,
    mut transport: LocalEcho,
) -> Result<(), Box<dyn Error>> {
    let palette = WindowPalette::default();
    let mut scroll_back: u16 = 0;

    loop {
        terminal.draw(|f| ui(f, session, &palette, scroll_back))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let size = terminal.size().unwrap_or_default();
                let frame = Rect::new(0, 0, size.width, size.height);
                let chat = cell_rect(&session.config().chat_window, session.config().font_size, frame);
                let page = transcript_view_height(chat).max(1);
                match handle_key(key, session, &mut transport, &mut scroll_back, page)? {
                    Flow::Quit => break,
                    Flow::Continue => {}
                }
            }
            Event::Paste(text) => {
                if let Some(composer) = session.composer_mut() {
                    composer.insert_str(&text);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Applies one key press. `page` is the transcript view height, used as the
/// PageUp/PageDown step.
fn handle_key(
    key: KeyEvent,
    session: &mut ChatSession,
    transport: &mut dyn ChatTransport,
    scroll_back: &mut u16,
    page: u16,
) -> Result<Flow, Box<dyn Error>> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(Flow::Quit);
        }
        KeyCode::Esc => {
            session.close();
            return Ok(Flow::Quit);
        }
        KeyCode::Enter => {
            if let Some(outcome) = session.submit() {
                transport.send(outcome.line())?;
                *scroll_back = 0;
            }
            while let Some(line) = transport.poll_incoming() {
                session.receive(line);
            }
        }
        KeyCode::Backspace => {
            if let Some(composer) = session.composer_mut() {
                composer.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(composer) = session.composer_mut() {
                composer.delete();
            }
        }
        KeyCode::Left => {
            if let Some(composer) = session.composer_mut() {
                composer.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(composer) = session.composer_mut() {
                composer.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(composer) = session.composer_mut() {
                composer.move_home();
            }
        }
        KeyCode::End => {
            if let Some(composer) = session.composer_mut() {
                composer.move_end();
            }
        }
        KeyCode::PageUp => {
            *scroll_back = scroll_back.saturating_add(page);
        }
        KeyCode::PageDown => {
            *scroll_back = scroll_back.saturating_sub(page);
        }
        KeyCode::Char(c) => {
            if let Some(composer) = session.composer_mut() {
                composer.insert_char(c);
            }
        }
        _ => {}
    }
    Ok(Flow::Continue)
}
