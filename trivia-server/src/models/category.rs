//! Question category

use serde::{Deserialize, Serialize};

/// A pre-seeded question category.
///
/// Serializes as `{"id": .., "type": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_kind_as_type() {
        let value = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(value, json!({"id": 1, "type": "Science"}));
    }
}
