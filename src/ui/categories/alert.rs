use uuid::Uuid;

/// Modal alert shown over the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertState {
    /// A paid category was tapped; the user may watch an ad to open it.
    RequiresUnlock { category_id: Uuid },
    /// A category without content was tapped.
    ComingSoon { category_id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertButton {
    Cancel,
    ShowAd,
    Ok,
}

impl AlertButton {
    pub fn label(&self) -> &'static str {
        match self {
            AlertButton::Cancel => "Cancel",
            AlertButton::ShowAd => "Show Ad",
            AlertButton::Ok => "OK",
        }
    }

    /// Cancel-role buttons only dismiss the alert.
    pub fn is_cancel(&self) -> bool {
        matches!(self, AlertButton::Cancel | AlertButton::Ok)
    }
}

impl AlertState {
    pub fn title(&self) -> &'static str {
        match self {
            AlertState::RequiresUnlock { .. } => "Watch Ad to continue",
            AlertState::ComingSoon { .. } => "Coming Soon",
        }
    }

    pub fn buttons(&self) -> &'static [AlertButton] {
        match self {
            AlertState::RequiresUnlock { .. } => &[AlertButton::Cancel, AlertButton::ShowAd],
            AlertState::ComingSoon { .. } => &[AlertButton::Ok],
        }
    }

    pub fn category_id(&self) -> Uuid {
        match self {
            AlertState::RequiresUnlock { category_id } | AlertState::ComingSoon { category_id } => {
                *category_id
            }
        }
    }
}
