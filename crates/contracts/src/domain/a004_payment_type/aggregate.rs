use serde::{Deserialize, Serialize};
use std::fmt;

/// Meter category (نوع العداد); decides the default monthly amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    SmallMeter,
    MediumMeter,
    LargeMeter,
}

impl PaymentType {
    pub const ALL: [PaymentType; 3] = [
        PaymentType::SmallMeter,
        PaymentType::MediumMeter,
        PaymentType::LargeMeter,
    ];

    /// Wire key, e.g. `SMALL_METER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::SmallMeter => "SMALL_METER",
            PaymentType::MediumMeter => "MEDIUM_METER",
            PaymentType::LargeMeter => "LARGE_METER",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Tariff shipped with the system.
    pub fn default_config(&self) -> PaymentTypeConfig {
        let (name, amount, color) = match self {
            PaymentType::SmallMeter => ("عداد صغير", 5000.0, "#4CAF50"),
            PaymentType::MediumMeter => ("عداد متوسط", 10000.0, "#FF9800"),
            PaymentType::LargeMeter => ("عداد كبير", 15000.0, "#F44336"),
        };
        PaymentTypeConfig {
            id: *self,
            name: name.to_string(),
            amount,
            color: color.to_string(),
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTypeConfig {
    pub id: PaymentType,
    pub name: String,
    pub amount: f64,
    pub color: String,
}

/// The tariff catalogue as edited on the payment types page.
///
/// Edits live only as long as the page view; there is no endpoint for
/// tariffs, the backend keeps its own amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTable {
    entries: Vec<PaymentTypeConfig>,
}

impl Default for TariffTable {
    fn default() -> Self {
        Self {
            entries: PaymentType::ALL.iter().map(|t| t.default_config()).collect(),
        }
    }
}

impl TariffTable {
    pub fn entries(&self) -> &[PaymentTypeConfig] {
        &self.entries
    }

    pub fn get(&self, id: PaymentType) -> Option<&PaymentTypeConfig> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Display name of a meter type, `غير محدد` if it is not in the table.
    pub fn name_of(&self, id: PaymentType) -> &str {
        self.get(id).map(|e| e.name.as_str()).unwrap_or("غير محدد")
    }

    /// Applies an amount typed by the user. Only positive numbers are accepted.
    pub fn update_amount(&mut self, id: PaymentType, input: &str) -> Result<f64, String> {
        let amount = input
            .trim()
            .parse::<f64>()
            .map_err(|_| "يجب إدخال رقم صحيح".to_string())?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err("يجب أن يكون المبلغ أكبر من صفر".into());
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| format!("نوع دفع غير معروف: {}", id))?;
        entry.amount = amount;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentType::LargeMeter).unwrap(),
            "\"LARGE_METER\""
        );
        let t: PaymentType = serde_json::from_str("\"MEDIUM_METER\"").unwrap();
        assert_eq!(t, PaymentType::MediumMeter);
        assert_eq!(PaymentType::from_key("SMALL_METER"), Some(PaymentType::SmallMeter));
        assert_eq!(PaymentType::from_key("HUGE_METER"), None);
    }

    #[test]
    fn test_default_catalogue() {
        let table = TariffTable::default();
        let amounts: Vec<f64> = table.entries().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![5000.0, 10000.0, 15000.0]);
        assert_eq!(table.name_of(PaymentType::SmallMeter), "عداد صغير");
        assert_eq!(table.get(PaymentType::LargeMeter).unwrap().color, "#F44336");
    }

    #[test]
    fn test_update_amount_accepts_positive_numbers() {
        let mut table = TariffTable::default();
        assert_eq!(table.update_amount(PaymentType::MediumMeter, "12500"), Ok(12500.0));
        assert_eq!(table.get(PaymentType::MediumMeter).unwrap().amount, 12500.0);
    }

    #[test]
    fn test_update_amount_rejects_invalid_input() {
        let mut table = TariffTable::default();
        assert!(table.update_amount(PaymentType::SmallMeter, "").is_err());
        assert!(table.update_amount(PaymentType::SmallMeter, "abc").is_err());
        assert!(table.update_amount(PaymentType::SmallMeter, "0").is_err());
        assert!(table.update_amount(PaymentType::SmallMeter, "-100").is_err());
        assert_eq!(table.get(PaymentType::SmallMeter).unwrap().amount, 5000.0);
    }
}
