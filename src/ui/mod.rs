//! Presentation-facing state machines.
//!
//! Rendering lives outside this crate; views read these states and send
//! intents back.

pub mod categories;
pub mod facts;
pub mod mvi;
