use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Access tier of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    Free,
    Paid,
    ComingSoon,
}

impl CategoryStatus {
    /// Stable string form used on the wire and in the cache.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Free => "free",
            CategoryStatus::Paid => "paid",
            CategoryStatus::ComingSoon => "coming_soon",
        }
    }

    /// Label shown next to a category.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryStatus::Free => "Free",
            CategoryStatus::Paid => "Premium",
            CategoryStatus::ComingSoon => "Coming Soon",
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for CategoryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(CategoryStatus::Free),
            "paid" => Ok(CategoryStatus::Paid),
            "coming_soon" => Ok(CategoryStatus::ComingSoon),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
