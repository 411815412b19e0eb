use thiserror::Error;

use crate::model::Category;
use crate::ui::facts::FactsState;
use crate::ui::mvi::UiState;

use super::alert::AlertState;

/// User-facing load failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoriesState {
    /// Unique by id, ascending by `order`.
    pub categories: Vec<Category>,
    pub is_loading: bool,
    pub error: Option<LoadError>,
    pub alert: Option<AlertState>,
    /// Open browsing session, if any.
    pub destination: Option<FactsState>,
    /// Set once a load attempt has succeeded.
    pub has_loaded: bool,
    /// Set once the cache has delivered its contents.
    pub has_cache_snapshot: bool,
}

impl UiState for CategoriesState {}

impl CategoriesState {
    pub fn phase(&self) -> LoadPhase {
        if self.is_loading {
            LoadPhase::Loading
        } else if self.error.is_some() {
            LoadPhase::Failed
        } else if self.has_loaded {
            LoadPhase::Ready
        } else {
            LoadPhase::Idle
        }
    }

    pub fn find(&self, title: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.title.eq_ignore_ascii_case(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(CategoriesState::default().phase(), LoadPhase::Idle);
    }

    #[test]
    fn phase_priority() {
        let mut state = CategoriesState {
            is_loading: true,
            error: Some(LoadError::Network("x".into())),
            ..Default::default()
        };
        assert_eq!(state.phase(), LoadPhase::Loading);
        state.is_loading = false;
        assert_eq!(state.phase(), LoadPhase::Failed);
        state.error = None;
        state.has_loaded = true;
        assert_eq!(state.phase(), LoadPhase::Ready);
    }

    #[test]
    fn network_error_message() {
        let err = LoadError::Network("HTTP error: 500".into());
        assert_eq!(err.to_string(), "Network error: HTTP error: 500");
    }
}
