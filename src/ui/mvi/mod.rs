//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between the presentation layer and the app core.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          ↓
//!    └─────── Effect
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or effect results
//! - **Reducer**: Pure function that transforms state and may request an effect

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
