use serde::{Deserialize, Serialize};

use crate::domain::a002_square::Square;
use crate::domain::a004_payment_type::PaymentType;
use crate::domain::common::require_text;

/// House (منزل): a billed water connection inside a square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub id: String,
    pub house_number: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub is_occupied: bool,
    pub has_paid: bool,
    pub payment_type: PaymentType,
    #[serde(default)]
    pub required_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_image: Option<String>,
    pub square_id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square: Option<Square>,
}

impl House {
    pub fn square_name(&self) -> Option<&str> {
        self.square.as_ref().map(|s| s.name.as_str())
    }

    pub fn neighborhood_name(&self) -> Option<&str> {
        self.square.as_ref().and_then(|s| s.neighborhood_name())
    }

    pub fn amount_or_zero(&self) -> f64 {
        self.required_amount.unwrap_or(0.0)
    }

    pub fn payment_label(&self) -> &'static str {
        if self.has_paid {
            "مدفوع"
        } else {
            "غير مدفوع"
        }
    }

    pub fn occupancy_label(&self) -> &'static str {
        if self.is_occupied {
            "مأهول"
        } else {
            "غير مأهول"
        }
    }
}

/// Body of `POST /api/houses` and `PUT /api/houses/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseForm {
    pub house_number: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub is_occupied: bool,
    pub has_paid: bool,
    pub payment_type: PaymentType,
    pub required_amount: f64,
    pub square_id: String,
}

impl Default for HouseForm {
    fn default() -> Self {
        Self {
            house_number: String::new(),
            owner_name: String::new(),
            owner_phone: String::new(),
            is_occupied: true,
            has_paid: false,
            payment_type: PaymentType::SmallMeter,
            required_amount: 0.0,
            square_id: String::new(),
        }
    }
}

impl HouseForm {
    pub fn from_entity(h: &House) -> Self {
        Self {
            house_number: h.house_number.clone(),
            owner_name: h.owner_name.clone(),
            owner_phone: h.owner_phone.clone(),
            is_occupied: h.is_occupied,
            has_paid: h.has_paid,
            payment_type: h.payment_type,
            required_amount: h.amount_or_zero(),
            square_id: h.square_id.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.house_number, "رقم المنزل مطلوب")?;
        require_text(&self.square_id, "يجب اختيار المربع")?;
        require_text(&self.owner_name, "اسم المالك مطلوب")?;
        require_text(&self.owner_phone, "رقم الهاتف مطلوب")?;
        if self.required_amount < 0.0 {
            return Err("المبلغ المطلوب لا يمكن أن يكون سالباً".into());
        }
        Ok(())
    }
}

/// Parses the amount input the way the form does: anything unparsable is 0.
pub fn parse_amount_input(value: &str) -> f64 {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUSE_JSON: &str = r#"{
        "id": "h1",
        "houseNumber": "12",
        "ownerName": "Ahmed Ali",
        "ownerPhone": "0912000000",
        "isOccupied": true,
        "hasPaid": false,
        "paymentType": "MEDIUM_METER",
        "squareId": "s1",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;

    #[test]
    fn test_deserialize_without_amount() {
        let h: House = serde_json::from_str(HOUSE_JSON).unwrap();
        assert_eq!(h.payment_type, PaymentType::MediumMeter);
        assert_eq!(h.required_amount, None);
        assert_eq!(h.amount_or_zero(), 0.0);
        assert_eq!(h.payment_label(), "غير مدفوع");
        assert_eq!(h.occupancy_label(), "مأهول");
        assert_eq!(h.square_name(), None);
    }

    #[test]
    fn test_default_form() {
        let form = HouseForm::default();
        assert!(form.is_occupied);
        assert!(!form.has_paid);
        assert_eq!(form.payment_type, PaymentType::SmallMeter);
        assert_eq!(form.required_amount, 0.0);

        let v = serde_json::to_value(&form).unwrap();
        assert_eq!(v["paymentType"], "SMALL_METER");
        assert_eq!(v["isOccupied"], true);
        assert_eq!(v["requiredAmount"], 0.0);
    }

    #[test]
    fn test_form_from_entity() {
        let h: House = serde_json::from_str(HOUSE_JSON).unwrap();
        let form = HouseForm::from_entity(&h);
        assert_eq!(form.house_number, "12");
        assert_eq!(form.square_id, "s1");
        assert_eq!(form.required_amount, 0.0);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_square() {
        let form = HouseForm {
            house_number: "3".into(),
            owner_name: "x".into(),
            owner_phone: "1".into(),
            ..HouseForm::default()
        };
        assert_eq!(form.validate(), Err("يجب اختيار المربع".to_string()));
    }

    #[test]
    fn test_parse_amount_input() {
        assert_eq!(parse_amount_input("7500"), 7500.0);
        assert_eq!(parse_amount_input(" 12.5 "), 12.5);
        assert_eq!(parse_amount_input(""), 0.0);
        assert_eq!(parse_amount_input("abc"), 0.0);
    }
}
