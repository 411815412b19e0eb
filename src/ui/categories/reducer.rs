use uuid::Uuid;

use crate::model::{normalize_categories, Category, CategoryStatus};
use crate::ui::facts::{FactsReducer, FactsState};
use crate::ui::mvi::Reducer;

use super::alert::AlertState;
use super::intent::{CategoriesEffect, CategoriesIntent};
use super::state::CategoriesState;

pub struct CategoriesReducer;

impl Reducer for CategoriesReducer {
    type State = CategoriesState;
    type Intent = CategoriesIntent;
    type Effect = CategoriesEffect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Option<Self::Effect>) {
        match intent {
            CategoriesIntent::OnAppear => {
                state.is_loading = true;
                return (state, Some(CategoriesEffect::LoadCategories));
            }

            CategoriesIntent::CategoriesResponse(Ok(_)) => {
                state.is_loading = false;
                state.error = None;
                state.has_loaded = true;
            }

            CategoriesIntent::CategoriesResponse(Err(error)) => {
                // The visible list is left as it was.
                state.is_loading = false;
                state.error = Some(error);
            }

            CategoriesIntent::UpdateCategories(categories) => {
                state.categories = normalize_categories(categories);
                state.has_cache_snapshot = true;
            }

            CategoriesIntent::CategoryTapped(category) => match category.status {
                CategoryStatus::Free => {
                    state.destination = Some(FactsState::new(category));
                }
                CategoryStatus::Paid => {
                    state.alert = Some(AlertState::RequiresUnlock {
                        category_id: category.id,
                    });
                }
                CategoryStatus::ComingSoon => {
                    state.alert = Some(AlertState::ComingSoon {
                        category_id: category.id,
                    });
                }
            },

            CategoriesIntent::ShowAd => {
                if let Some(AlertState::RequiresUnlock { category_id }) = state.alert {
                    state.alert = None;
                    state.is_loading = true;
                    return (state, Some(CategoriesEffect::WatchAd { category_id }));
                }
            }

            CategoriesIntent::AdWatched { category_id } => {
                state.is_loading = false;
                if let Some(category) = unlock_target(&state.categories, category_id) {
                    state.destination = Some(FactsState::new(category.clone()));
                }
            }

            CategoriesIntent::AlertDismissed => state.alert = None,

            CategoriesIntent::DestinationDismissed => state.destination = None,

            CategoriesIntent::Facts(facts_intent) => {
                if let Some(facts) = state.destination.take() {
                    let (facts, _) = FactsReducer::reduce(facts, facts_intent);
                    state.destination = Some(facts);
                }
            }

            CategoriesIntent::DismissError => state.error = None,
        }
        (state, None)
    }
}

/// Category to open after an ad: the one that was tapped if it is still
/// listed, otherwise the first paid category.
fn unlock_target(categories: &[Category], tapped: Uuid) -> Option<&Category> {
    categories
        .iter()
        .find(|c| c.id == tapped)
        .or_else(|| {
            categories
                .iter()
                .find(|c| c.status == CategoryStatus::Paid)
        })
}
