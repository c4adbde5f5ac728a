mod registry;

pub use registry::{all_line_commands, find_line_command, LineCommand};

use serde::Serialize;
use tracing::debug;

use crate::core::line::ChatLine;

/// Builds the classified line for a matched prefix, given the raw line and
/// the text after the prefix.
pub type LineHandler = fn(&str, &str) -> ChatLine;

/// What [`classify`] decided about one submitted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "line", rename_all = "snake_case")]
pub enum LineOutcome {
    /// The line matched a command prefix or the `Name: text` shape.
    Classified(ChatLine),
    /// The line had no prefix and no `:`. It still carries a renderable
    /// whole-line fallback so nothing the user typed is lost.
    MalformedPlain(ChatLine),
}

impl LineOutcome {
    pub fn line(&self) -> &ChatLine {
        match self {
            LineOutcome::Classified(line) | LineOutcome::MalformedPlain(line) => line,
        }
    }

    pub fn into_line(self) -> ChatLine {
        match self {
            LineOutcome::Classified(line) | LineOutcome::MalformedPlain(line) => line,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, LineOutcome::MalformedPlain(_))
    }
}

/// Classifies one submitted line.
///
/// Command prefixes are tried first, in registry order; everything else is
/// split once on the first `:` into sender and body, with any later colons
/// left in the body untouched. Input that fits neither shape comes back as
/// [`LineOutcome::MalformedPlain`] rather than an error, because the line
/// still has to show up in the transcript. Total for every string,
/// including `""`.
pub fn classify(raw: &str) -> LineOutcome {
    if let Some(command) = registry::find_line_command(raw) {
        debug!(prefix = command.prefix, "line matched command prefix");
        let body = &raw[command.prefix.len()..];
        return LineOutcome::Classified((command.handler)(raw, body));
    }

    match raw.split_once(':') {
        Some((sender, body)) => LineOutcome::Classified(ChatLine::plain(raw, sender, body)),
        None => {
            debug!("line has no sender separator; keeping it whole");
            LineOutcome::MalformedPlain(ChatLine::unparsed(raw))
        }
    }
}

pub(super) fn handle_action(raw: &str, body: &str) -> ChatLine {
    ChatLine::action(raw, body)
}

pub(super) fn handle_whisper(raw: &str, body: &str) -> ChatLine {
    ChatLine::whisper(raw, body)
}
