use uuid::Uuid;

/// A single fact card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub id: Uuid,
    pub fact: String,
    pub image: String,
}

impl Fact {
    /// Build a fact whose id is derived from its owning category and position.
    pub fn new(category_id: Uuid, index: usize, fact: impl Into<String>, image: impl Into<String>) -> Self {
        let fact = fact.into();
        Self {
            id: fact_key(category_id, index, &fact),
            fact,
            image: image.into(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.fact.split_whitespace().count()
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Case-insensitive substring match on the fact text.
    pub fn contains(&self, term: &str) -> bool {
        self.fact.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Stable key for a fact: the same text at the same position always maps
/// to the same id.
pub fn fact_key(category_id: Uuid, index: usize, fact: &str) -> Uuid {
    Uuid::new_v5(&category_id, format!("{}:{}", index, fact).as_bytes())
}
