use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FactsIntent {
    NextFact,
    PreviousFact,
    /// Jump to an index; out-of-range values are clamped.
    SetCurrentFact(i64),
    ShareFact,
    ShareSheetDismissed,
    /// The platform share sheet reported a failure.
    ShareFailed,
    DismissError,
}

impl Intent for FactsIntent {}
