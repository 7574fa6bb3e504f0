use serde::{Deserialize, Serialize};

use crate::domain::a003_house::House;

/// Totals shown on the overview page, computed client-side from the
/// four entity lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_neighborhoods: usize,
    pub total_squares: usize,
    pub total_houses: usize,
    pub paid_houses: usize,
    pub unpaid_houses: usize,
    pub total_revenue: f64,
}

impl DashboardStats {
    pub fn compute(users: usize, neighborhoods: usize, squares: usize, houses: &[House]) -> Self {
        let paid: Vec<&House> = houses.iter().filter(|h| h.has_paid).collect();
        Self {
            total_users: users,
            total_neighborhoods: neighborhoods,
            total_squares: squares,
            total_houses: houses.len(),
            paid_houses: paid.len(),
            unpaid_houses: houses.len() - paid.len(),
            total_revenue: paid.iter().map(|h| h.amount_or_zero()).sum(),
        }
    }

    /// Paid share in whole percent.
    pub fn payment_rate(&self) -> u32 {
        if self.total_houses == 0 {
            return 0;
        }
        ((self.paid_houses as f64 / self.total_houses as f64) * 100.0).round() as u32
    }

    pub fn average_payment(&self) -> f64 {
        if self.paid_houses == 0 {
            return 0.0;
        }
        (self.total_revenue / self.paid_houses as f64).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_payment_type::PaymentType;

    fn house(has_paid: bool, amount: Option<f64>) -> House {
        House {
            id: "h".into(),
            house_number: "1".into(),
            owner_name: "o".into(),
            owner_phone: "p".into(),
            is_occupied: true,
            has_paid,
            payment_type: PaymentType::SmallMeter,
            required_amount: amount,
            receipt_image: None,
            square_id: "s".into(),
            created_at: String::new(),
            updated_at: String::new(),
            square: None,
        }
    }

    #[test]
    fn test_compute() {
        let houses = vec![
            house(true, Some(5000.0)),
            house(true, Some(10000.0)),
            house(false, Some(15000.0)),
        ];
        let stats = DashboardStats::compute(2, 3, 4, &houses);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_houses, 3);
        assert_eq!(stats.paid_houses, 2);
        assert_eq!(stats.unpaid_houses, 1);
        assert_eq!(stats.total_revenue, 15000.0);
        assert_eq!(stats.payment_rate(), 67);
        assert_eq!(stats.average_payment(), 7500.0);
    }

    #[test]
    fn test_empty_has_zero_rates() {
        let stats = DashboardStats::compute(0, 0, 0, &[]);
        assert_eq!(stats.payment_rate(), 0);
        assert_eq!(stats.average_payment(), 0.0);
    }
}
