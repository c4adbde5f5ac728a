//! Delivery seam between the chat view and whatever carries lines.
//!
//! Nothing here talks to a network. [`ChatTransport`] is the boundary a
//! real carrier would implement; [`LocalEcho`] loops sent lines straight
//! back and is what the terminal front-end runs against.

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt;

use tracing::debug;

use crate::core::line::ChatLine;

/// Errors surfaced by a transport when a line cannot be handed off.
#[derive(Debug)]
pub enum TransportError {
    /// The transport is no longer accepting lines.
    Closed,
    /// The carrier refused this particular line.
    Rejected { reason: String },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Closed => write!(f, "transport is closed"),
            TransportError::Rejected { reason } => {
                write!(f, "line rejected by transport: {reason}")
            }
        }
    }
}

impl StdError for TransportError {}

/// The carrier contract: push one classified line out, and hand back lines
/// that have arrived.
///
/// Delivery is pumped by the host loop, which drains
/// [`ChatTransport::poll_incoming`] after each tick; lines must come back
/// in the order they were accepted.
pub trait ChatTransport {
    fn send(&mut self, line: &ChatLine) -> Result<(), TransportError>;

    fn poll_incoming(&mut self) -> Option<ChatLine>;
}

/// Loopback transport: every accepted line is delivered straight back.
#[derive(Debug, Default)]
pub struct LocalEcho {
    pending: VecDeque<ChatLine>,
}

impl LocalEcho {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChatTransport for LocalEcho {
    fn send(&mut self, line: &ChatLine) -> Result<(), TransportError> {
        debug!(kind = line.kind().as_str(), "echoing line back");
        self.pending.push_back(line.clone());
        Ok(())
    }

    fn poll_incoming(&mut self) -> Option<ChatLine> {
        self.pending.pop_front()
    }
}
