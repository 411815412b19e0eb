use thiserror::Error;

use crate::model::{Category, Fact};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("Failed to share fact")]
    FailedToShare,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactsState {
    pub category: Category,
    /// Always within `0..fact_count` when the category has facts.
    pub current_fact_index: usize,
    pub is_share_presented: bool,
    pub error: Option<ShareError>,
}

impl UiState for FactsState {}

impl FactsState {
    /// Open a session on the first fact.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            current_fact_index: 0,
            is_share_presented: false,
            error: None,
        }
    }

    pub fn current_fact(&self) -> Option<&Fact> {
        self.category.fact(self.current_fact_index)
    }

    /// Text handed to the share sheet.
    pub fn share_text(&self) -> Option<String> {
        self.current_fact()
            .map(|fact| format!("{}\n\n— {}", fact.fact, self.category.title))
    }

    /// Highest valid index, or 0 for an empty category.
    pub fn last_index(&self) -> usize {
        self.category.fact_count().saturating_sub(1)
    }

    pub fn has_next(&self) -> bool {
        self.current_fact_index < self.last_index()
    }

    pub fn has_previous(&self) -> bool {
        self.current_fact_index > 0
    }
}
