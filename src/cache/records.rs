//! Persisted record layout.
//!
//! Records mirror the feed schema plus a string primary key. Facts are
//! nested inside their category, so removing a category removes its facts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{category_key, fact_key, Category, CategoryStatus, Fact};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedCategory {
    pub id: String,
    pub title: String,
    pub category_description: String,
    pub image: String,
    pub order: i64,
    pub status: String,
    #[serde(default)]
    pub content: Vec<CachedFact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedFact {
    pub id: String,
    pub fact: String,
    pub image: String,
}

impl From<&Category> for CachedCategory {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            title: category.title.clone(),
            category_description: category.description.clone(),
            image: category.image.clone(),
            order: category.order,
            status: category.status.as_str().to_string(),
            content: category.content.iter().map(CachedFact::from).collect(),
        }
    }
}

impl From<&Fact> for CachedFact {
    fn from(fact: &Fact) -> Self {
        Self {
            id: fact.id.to_string(),
            fact: fact.fact.clone(),
            image: fact.image.clone(),
        }
    }
}

impl From<CachedCategory> for Category {
    /// Lenient: unknown status strings become `coming_soon`, unparsable ids
    /// are re-derived from the business key.
    fn from(record: CachedCategory) -> Self {
        let id = Uuid::parse_str(&record.id)
            .unwrap_or_else(|_| category_key(&record.title, record.order));
        let status = record
            .status
            .parse::<CategoryStatus>()
            .unwrap_or(CategoryStatus::ComingSoon);
        let content = record
            .content
            .into_iter()
            .enumerate()
            .map(|(index, fact)| Fact {
                id: Uuid::parse_str(&fact.id)
                    .unwrap_or_else(|_| fact_key(id, index, &fact.fact)),
                fact: fact.fact,
                image: fact.image,
            })
            .collect();
        Category {
            id,
            title: record.title,
            description: record.category_description,
            image: record.image,
            order: record.order,
            status,
            content,
        }
    }
}
