use serde::{Deserialize, Serialize};

use crate::domain::a001_neighborhood::Neighborhood;
use crate::domain::a003_house::House;
use crate::domain::common::require_text;

/// Square (مربع): a sub-zone of a neighborhood that groups houses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Square {
    pub id: String,
    pub name: String,
    pub neighborhood_id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<Neighborhood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub houses: Option<Vec<House>>,
}

impl Square {
    pub fn neighborhood_name(&self) -> Option<&str> {
        self.neighborhood.as_ref().map(|n| n.name.as_str())
    }

    /// "<square> - <neighborhood>" as shown in the house form select.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.neighborhood_name().unwrap_or(""))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareForm {
    pub name: String,
    pub neighborhood_id: String,
}

impl SquareForm {
    pub fn from_entity(s: &Square) -> Self {
        Self {
            name: s.name.clone(),
            neighborhood_id: s.neighborhood_id.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "اسم المربع مطلوب")?;
        require_text(&self.neighborhood_id, "يجب اختيار الحي")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nested_neighborhood() {
        let json = r#"{
            "id": "s1",
            "name": "مربع 4",
            "neighborhoodId": "n1",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "neighborhood": {
                "id": "n1",
                "name": "الصافية",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }
        }"#;
        let s: Square = serde_json::from_str(json).unwrap();
        assert_eq!(s.neighborhood_id, "n1");
        assert_eq!(s.neighborhood_name(), Some("الصافية"));
        assert_eq!(s.label(), "مربع 4 - الصافية");
        assert!(s.houses.is_none());
    }

    #[test]
    fn test_form_serializes_camel_case() {
        let form = SquareForm {
            name: "مربع 1".into(),
            neighborhood_id: "n9".into(),
        };
        let v = serde_json::to_value(&form).unwrap();
        assert_eq!(v["neighborhoodId"], "n9");
        assert!(form.validate().is_ok());

        let missing = SquareForm {
            name: "مربع 1".into(),
            neighborhood_id: String::new(),
        };
        assert_eq!(missing.validate(), Err("يجب اختيار الحي".to_string()));
    }
}
