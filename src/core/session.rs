//! Open/submit/close lifecycle around the transcript and composer.

use tracing::debug;

use crate::commands::{classify, LineOutcome};
use crate::core::composer::Composer;
use crate::core::config::ChatConfig;
use crate::core::history::History;
use crate::core::line::ChatLine;

/// Whether the composer is accepting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    Inactive,
    Active,
}

/// One chat view: its configuration, its transcript, and (while the view
/// is open) its composer.
///
/// The composer's presence is the whole state machine; there is no
/// intermediate "sending" state. Submitting does not append: delivery
/// comes back through [`ChatSession::receive`], which is the only path
/// into the transcript.
#[derive(Debug)]
pub struct ChatSession {
    config: ChatConfig,
    history: History,
    composer: Option<Composer>,
}

impl ChatSession {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            history: History::new(),
            composer: None,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn composer(&self) -> Option<&Composer> {
        self.composer.as_ref()
    }

    pub fn composer_mut(&mut self) -> Option<&mut Composer> {
        self.composer.as_mut()
    }

    pub fn state(&self) -> ComposerState {
        if self.composer.is_some() {
            ComposerState::Active
        } else {
            ComposerState::Inactive
        }
    }

    /// Opens the composer. Reopening an already open view keeps whatever
    /// is in the buffer.
    pub fn open(&mut self) {
        if self.composer.is_none() {
            debug!("composer opened");
            self.composer = Some(Composer::new());
        }
    }

    /// Closes the composer, dropping whatever was typed.
    pub fn close(&mut self) {
        if self.composer.take().is_some() {
            debug!("composer closed");
        }
    }

    /// Takes the composed text and classifies it.
    ///
    /// Blank input and a closed composer both yield `None` and change
    /// nothing. On acceptance the buffer is left empty with the cursor at
    /// zero and the composer stays open for the next line.
    pub fn submit(&mut self) -> Option<LineOutcome> {
        let text = self.composer.as_mut()?.take_submission()?;
        debug!(len = text.len(), "line submitted");
        Some(classify(&text))
    }

    /// Appends a delivered line to the transcript.
    pub fn receive(&mut self, line: ChatLine) {
        self.history.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::line::LineKind;
    use crate::utils::test_utils::classified;

    fn open_session() -> ChatSession {
        let mut session = ChatSession::new(ChatConfig::default());
        session.open();
        session
    }

    #[test]
    fn starts_inactive_with_an_empty_transcript() {
        let session = ChatSession::new(ChatConfig::default());
        assert_eq!(session.state(), ComposerState::Inactive);
        assert!(session.history().is_empty());
        assert!(session.composer().is_none());
    }

    #[test]
    fn open_submit_close_walks_the_lifecycle() {
        let mut session = open_session();
        assert_eq!(session.state(), ComposerState::Active);

        session.composer_mut().unwrap().insert_str("/me waves");
        let outcome = session.submit().expect("submission accepted");
        assert_eq!(outcome.line().kind(), LineKind::Action);

        // Submission loops in the active state with a cleared buffer.
        assert_eq!(session.state(), ComposerState::Active);
        let composer = session.composer().unwrap();
        assert_eq!(composer.text(), "");
        assert_eq!(composer.cursor(), 0);

        session.close();
        assert_eq!(session.state(), ComposerState::Inactive);
    }

    #[test]
    fn submit_does_not_append_to_the_transcript() {
        let mut session = open_session();
        session.composer_mut().unwrap().insert_str("Alice: hi");
        let outcome = session.submit().unwrap();
        assert!(session.history().is_empty());

        session.receive(outcome.into_line());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn blank_submission_changes_nothing() {
        let mut session = open_session();
        session.composer_mut().unwrap().insert_str("   ");
        assert!(session.submit().is_none());
        assert_eq!(session.composer().unwrap().text(), "   ");
        assert_eq!(session.state(), ComposerState::Active);
    }

    #[test]
    fn submit_while_inactive_is_none() {
        let mut session = ChatSession::new(ChatConfig::default());
        assert!(session.submit().is_none());
    }

    #[test]
    fn close_drops_typed_text() {
        let mut session = open_session();
        session.composer_mut().unwrap().insert_str("draft");
        session.close();
        session.open();
        assert_eq!(session.composer().unwrap().text(), "");
    }

    #[test]
    fn reopen_while_active_keeps_the_buffer() {
        let mut session = open_session();
        session.composer_mut().unwrap().insert_str("keep me");
        session.open();
        assert_eq!(session.composer().unwrap().text(), "keep me");
    }

    #[test]
    fn received_lines_append_in_order() {
        let mut session = ChatSession::new(ChatConfig::default());
        for raw in ["Alice: one", "Bob: two"] {
            session.receive(classified(raw));
        }
        let raws: Vec<&str> = session.history().iter().map(|line| line.raw()).collect();
        assert_eq!(raws, ["Alice: one", "Bob: two"]);
    }
}
