//! Category list feature: loading, cache mirroring, selection and unlock.

mod alert;
mod intent;
mod reducer;
mod state;

pub use alert::{AlertButton, AlertState};
pub use intent::{CategoriesEffect, CategoriesIntent};
pub use reducer::CategoriesReducer;
pub use state::{CategoriesState, LoadError, LoadPhase};
