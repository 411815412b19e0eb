//! Runs the category reducer: owns state, executes effects, and keeps the
//! cache subscription alive for the lifetime of the store.

mod effects;
mod environment;
mod error;
mod store;
mod subscription;

pub use environment::Environment;
pub use error::StartupError;
pub use store::Store;
pub use subscription::Subscription;
