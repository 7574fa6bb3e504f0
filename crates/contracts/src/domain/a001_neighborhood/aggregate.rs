use serde::{Deserialize, Serialize};

use crate::domain::a002_square::Square;
use crate::domain::common::require_text;

/// Neighborhood (حي): the top-level administrative zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squares: Option<Vec<Square>>,
}

/// Body of `POST /api/neighborhoods` and `PUT /api/neighborhoods/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodForm {
    pub name: String,
}

impl NeighborhoodForm {
    pub fn from_entity(n: &Neighborhood) -> Self {
        Self {
            name: n.name.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "اسم الحي مطلوب")
    }
}
