use std::convert::Infallible;

use crate::ui::mvi::Reducer;

use super::intent::FactsIntent;
use super::state::{FactsState, ShareError};

pub struct FactsReducer;

impl Reducer for FactsReducer {
    type State = FactsState;
    type Intent = FactsIntent;
    type Effect = Infallible;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Option<Infallible>) {
        match intent {
            FactsIntent::NextFact => {
                if state.has_next() {
                    state.current_fact_index += 1;
                }
            }
            FactsIntent::PreviousFact => {
                if state.has_previous() {
                    state.current_fact_index -= 1;
                }
            }
            FactsIntent::SetCurrentFact(index) => {
                let last = state.last_index() as i64;
                state.current_fact_index = index.clamp(0, last) as usize;
            }
            FactsIntent::ShareFact => state.is_share_presented = true,
            FactsIntent::ShareSheetDismissed => state.is_share_presented = false,
            FactsIntent::ShareFailed => {
                state.is_share_presented = false;
                state.error = Some(ShareError::FailedToShare);
            }
            FactsIntent::DismissError => state.error = None,
        }
        (state, None)
    }
}
