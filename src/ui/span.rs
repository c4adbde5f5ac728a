//! Semantic segment metadata for laid-out lines.
//!
//! [`SegmentKind`] classifies the pieces of a rendered line so a surface
//! can act on meaning (which part is the sender, which is the whisper tag)
//! instead of sniffing styles.

/// Semantic classification for one piece of a laid-out line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// A sender tag drawn ahead of the body, e.g. `"Alice: "`.
    Sender,
    /// The literal whisper tag drawn ahead of a whispered body.
    WhisperTag,
    /// The line's text content.
    Body,
}

impl SegmentKind {
    #[inline]
    pub fn is_prefix(&self) -> bool {
        matches!(self, SegmentKind::Sender | SegmentKind::WhisperTag)
    }

    #[inline]
    pub fn is_body(&self) -> bool {
        matches!(self, SegmentKind::Body)
    }
}

/// One styled run of text within a laid-out line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
    pub color_id: u8,
    pub italic: bool,
}

impl Segment {
    pub fn new(text: impl Into<String>, kind: SegmentKind, color_id: u8, italic: bool) -> Self {
        Self {
            text: text.into(),
            kind,
            color_id,
            italic,
        }
    }
}
