use tracing::debug;

use crate::core::line::ChatLine;

/// Append-only transcript. Insertion order is display order, entries are
/// never rewritten, and nothing is ever evicted.
#[derive(Debug, Default)]
pub struct History {
    lines: Vec<ChatLine>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one classified line. This is the only mutation the
    /// transcript supports.
    pub fn push(&mut self, line: ChatLine) {
        debug!(
            index = self.lines.len(),
            kind = line.kind().as_str(),
            "transcript line appended"
        );
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatLine> {
        self.lines.iter()
    }

    pub fn last(&self) -> Option<&ChatLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
