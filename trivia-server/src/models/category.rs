//! Category records

use serde::ser::{Serialize, Serializer};
use sqlx::FromRow;

use super::CategoryId;

/// Category as stored
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: CategoryId,
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            kind: kind.into(),
        }
    }
}

/// Sort order for category listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrder {
    ById,
    ByType,
}

/// Categories rendered as a JSON object `{"<id>": "<type>"}`.
///
/// Keys are written in the order the categories were loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap(Vec<Category>);

impl CategoryMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Category>> for CategoryMap {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

impl Serialize for CategoryMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|c| (c.id, c.kind.as_str())))
    }
}
