use uuid::Uuid;

use crate::model::Category;
use crate::ui::facts::FactsIntent;
use crate::ui::mvi::Intent;

use super::state::LoadError;

#[derive(Debug, Clone, PartialEq)]
pub enum CategoriesIntent {
    /// Screen became visible, or the user asked to refresh.
    OnAppear,
    /// Result of the cache-or-fetch step. `Ok` carries how many categories
    /// the attempt produced.
    CategoriesResponse(Result<usize, LoadError>),
    /// The local cache emitted its full contents.
    UpdateCategories(Vec<Category>),
    CategoryTapped(Category),
    /// "Show Ad" pressed on the unlock alert.
    ShowAd,
    /// The simulated ad finished.
    AdWatched { category_id: Uuid },
    /// Alert closed through a cancel-role button.
    AlertDismissed,
    /// Browsing session closed.
    DestinationDismissed,
    Facts(FactsIntent),
    DismissError,
}

impl Intent for CategoriesIntent {}

/// Work requested by [`CategoriesReducer`](super::CategoriesReducer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoriesEffect {
    /// Use the cache if fresh, fetch otherwise, then mirror cache changes.
    LoadCategories,
    /// Wait out the simulated ad, then report [`CategoriesIntent::AdWatched`].
    WatchAd { category_id: Uuid },
}
