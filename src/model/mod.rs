//! Content records: categories, facts, and their access tiers.

mod category;
mod fact;
mod status;

pub use category::{category_key, normalize_categories, Category};
pub use fact::{fact_key, Fact};
pub use status::{CategoryStatus, UnknownStatus};
