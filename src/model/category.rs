use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fact::Fact;
use super::status::CategoryStatus;

const CATEGORY_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a8e_4b7d_4f3a_9d25_0c3e_81a4_57b2);

/// A themed bucket of facts.
///
/// Deserializing from the feed format derives `id` from title and order, so
/// two decodes of the same logical category compare equal. An empty fact
/// list forces [`CategoryStatus::ComingSoon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireCategory", into = "WireCategory")]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub order: i64,
    pub status: CategoryStatus,
    pub content: Vec<Fact>,
}

impl Category {
    /// Build a category by hand. `content` is `(fact, image)` pairs.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        order: i64,
        status: CategoryStatus,
        content: Vec<(String, String)>,
    ) -> Self {
        let title = title.into();
        let id = category_key(&title, order);
        let content = content
            .into_iter()
            .enumerate()
            .map(|(index, (fact, image))| Fact::new(id, index, fact, image))
            .collect();
        Self {
            id,
            title,
            description: description.into(),
            image: image.into(),
            order,
            status,
            content,
        }
    }

    /// Only free categories open without an unlock step.
    pub fn is_accessible(&self) -> bool {
        self.status == CategoryStatus::Free
    }

    pub fn fact_count(&self) -> usize {
        self.content.len()
    }

    pub fn fact(&self, index: usize) -> Option<&Fact> {
        self.content.get(index)
    }
}

/// Stable business key for a category.
pub fn category_key(title: &str, order: i64) -> Uuid {
    Uuid::new_v5(&CATEGORY_NAMESPACE, format!("{}:{}", order, title).as_bytes())
}

/// Dedup by id (first occurrence wins) and sort by `order` ascending.
pub fn normalize_categories(categories: impl IntoIterator<Item = Category>) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Category> = categories
        .into_iter()
        .filter(|category| seen.insert(category.id))
        .collect();
    unique.sort_by_key(|category| category.order);
    unique
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireFact {
    fact: String,
    image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireCategory {
    title: String,
    description: String,
    image: String,
    order: i64,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    content: Option<Vec<WireFact>>,
}

impl TryFrom<WireCategory> for Category {
    type Error = String;

    fn try_from(wire: WireCategory) -> Result<Self, Self::Error> {
        let content = wire.content.unwrap_or_default();
        let status = if content.is_empty() {
            CategoryStatus::ComingSoon
        } else {
            let raw = wire
                .status
                .ok_or_else(|| format!("missing field `status` for category '{}'", wire.title))?;
            raw.parse::<CategoryStatus>().map_err(|e| e.to_string())?
        };
        Ok(Category::new(
            wire.title,
            wire.description,
            wire.image,
            wire.order,
            status,
            content.into_iter().map(|f| (f.fact, f.image)).collect(),
        ))
    }
}

impl From<Category> for WireCategory {
    fn from(category: Category) -> Self {
        Self {
            title: category.title,
            description: category.description,
            image: category.image,
            order: category.order,
            status: Some(category.status.as_str().to_string()),
            content: Some(
                category
                    .content
                    .into_iter()
                    .map(|f| WireFact {
                        fact: f.fact,
                        image: f.image,
                    })
                    .collect(),
            ),
        }
    }
}
