//! Fact browsing session: one category, one visible fact at a time.

mod intent;
mod reducer;
mod state;

pub use intent::FactsIntent;
pub use reducer::FactsReducer;
pub use state::{FactsState, ShareError};
