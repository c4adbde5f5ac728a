use serde::{Deserialize, Serialize};

/// Palette slot for ordinary text.
pub const DEFAULT_COLOR_ID: u8 = 0;

/// Palette slot whispers are tinted with.
pub const WHISPER_COLOR_ID: u8 = 6;

/// Tag drawn ahead of a whispered body.
pub const WHISPER_TAG: &str = "[Whisper] ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Plain,
    Action,
    Whisper,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Plain => "plain",
            LineKind::Action => "action",
            LineKind::Whisper => "whisper",
        }
    }
}

/// Presentation hints attached to a classified line. Descriptive only:
/// resolving `color_id` against an actual palette is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHints {
    pub italic: bool,
    pub color_id: u8,
    /// Literal tag drawn ahead of the body, e.g. `"[Whisper] "`.
    pub prefix: Option<String>,
}

impl StyleHints {
    pub fn plain() -> Self {
        Self {
            italic: false,
            color_id: DEFAULT_COLOR_ID,
            prefix: None,
        }
    }
}

impl Default for StyleHints {
    fn default() -> Self {
        Self::plain()
    }
}

/// One transcript line, classified and ready to lay out.
///
/// Lines are produced by [`crate::commands::classify`] and never change
/// afterwards; all access goes through shared getters, so a transcript
/// entry renders the same way every frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLine {
    raw: String,
    kind: LineKind,
    sender: Option<String>,
    body: String,
    style: StyleHints,
}

impl ChatLine {
    /// An emote: the whole remainder is the body, drawn in italics with no
    /// sender.
    pub(crate) fn action(raw: &str, body: &str) -> Self {
        Self {
            raw: raw.to_string(),
            kind: LineKind::Action,
            sender: None,
            body: body.to_string(),
            style: StyleHints {
                italic: true,
                color_id: DEFAULT_COLOR_ID,
                prefix: None,
            },
        }
    }

    /// A whisper: tinted and tagged, no sender.
    pub(crate) fn whisper(raw: &str, body: &str) -> Self {
        Self {
            raw: raw.to_string(),
            kind: LineKind::Whisper,
            sender: None,
            body: body.to_string(),
            style: StyleHints {
                italic: false,
                color_id: WHISPER_COLOR_ID,
                prefix: Some(WHISPER_TAG.to_string()),
            },
        }
    }

    /// An ordinary `Name: text` line.
    pub(crate) fn plain(raw: &str, sender: &str, body: &str) -> Self {
        Self {
            raw: raw.to_string(),
            kind: LineKind::Plain,
            sender: Some(sender.to_string()),
            body: body.to_string(),
            style: StyleHints::plain(),
        }
    }

    /// Fallback for input that fits no shape. The whole line becomes the
    /// body so nothing the user typed is dropped.
    pub(crate) fn unparsed(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            kind: LineKind::Plain,
            sender: None,
            body: raw.to_string(),
            style: StyleHints::plain(),
        }
    }

    /// The submitted text, exactly as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn style(&self) -> &StyleHints {
        &self.style
    }
}
