//! Terminal UI layer for the chat view.
//!
//! Key submodules:
//! - [`chat_loop`]: the interaction loop that routes keys between the
//!   composer, the transport, and the scroll position.
//! - [`renderer`], [`layout`], and [`span`]: view composition and frame
//!   output.
//! - [`surface`]: the measure-and-paint boundary a front-end implements.
//! - [`palette`]: the indexed text palette.
//!
//! Ownership boundary: this layer presents and captures interaction state,
//! while [`crate::core`] owns classification and session logic.

pub mod chat_loop;
pub mod layout;
pub mod palette;
pub mod renderer;
pub mod span;
pub mod surface;
