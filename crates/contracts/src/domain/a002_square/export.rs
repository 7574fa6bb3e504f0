use serde::{Deserialize, Serialize};

use super::Square;

/// Placeholder used when a square comes back without its neighborhood.
pub const UNKNOWN_NEIGHBORHOOD: &str = "غير محدد";

/// One spreadsheet row of the squares export (`GET /api/squares/export`).
///
/// Counts and revenue are computed from the houses embedded in the export
/// payload; revenue only includes houses that have paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareExportRow {
    pub square_name: String,
    pub neighborhood_name: String,
    pub house_count: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub total_revenue: f64,
    pub created_at: String,
}

impl SquareExportRow {
    pub fn from_square(square: &Square) -> Self {
        let houses = square.houses.as_deref().unwrap_or(&[]);
        let paid_count = houses.iter().filter(|h| h.has_paid).count();
        let total_revenue = houses
            .iter()
            .filter(|h| h.has_paid)
            .map(|h| h.required_amount.unwrap_or(0.0))
            .sum();

        Self {
            square_name: square.name.clone(),
            neighborhood_name: square
                .neighborhood_name()
                .unwrap_or(UNKNOWN_NEIGHBORHOOD)
                .to_string(),
            house_count: houses.len(),
            paid_count,
            unpaid_count: houses.len() - paid_count,
            total_revenue,
            created_at: square.created_at.clone(),
        }
    }

    pub fn from_squares(squares: &[Square]) -> Vec<Self> {
        squares.iter().map(Self::from_square).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_house::House;
    use crate::domain::a004_payment_type::PaymentType;

    fn house(id: &str, has_paid: bool, amount: Option<f64>) -> House {
        House {
            id: id.into(),
            house_number: id.into(),
            owner_name: "مالك".into(),
            owner_phone: "0912345678".into(),
            is_occupied: true,
            has_paid,
            payment_type: PaymentType::SmallMeter,
            required_amount: amount,
            receipt_image: None,
            square_id: "s1".into(),
            created_at: String::new(),
            updated_at: String::new(),
            square: None,
        }
    }

    fn square(houses: Option<Vec<House>>) -> Square {
        Square {
            id: "s1".into(),
            name: "مربع 7".into(),
            neighborhood_id: "n1".into(),
            created_at: "2024-05-02T08:30:00.000Z".into(),
            updated_at: String::new(),
            neighborhood: None,
            houses,
        }
    }

    #[test]
    fn test_revenue_counts_only_paid_houses() {
        let s = square(Some(vec![
            house("1", true, Some(5000.0)),
            house("2", false, Some(10000.0)),
            house("3", true, Some(15000.0)),
            house("4", true, None),
        ]));
        let row = SquareExportRow::from_square(&s);
        assert_eq!(row.square_name, "مربع 7");
        assert_eq!(row.neighborhood_name, UNKNOWN_NEIGHBORHOOD);
        assert_eq!(row.house_count, 4);
        assert_eq!(row.paid_count, 3);
        assert_eq!(row.unpaid_count, 1);
        assert_eq!(row.total_revenue, 20000.0);
        assert_eq!(row.created_at, "2024-05-02T08:30:00.000Z");
    }

    #[test]
    fn test_square_without_houses() {
        let row = SquareExportRow::from_square(&square(None));
        assert_eq!(row.house_count, 0);
        assert_eq!(row.paid_count, 0);
        assert_eq!(row.unpaid_count, 0);
        assert_eq!(row.total_revenue, 0.0);
    }

    #[test]
    fn test_one_row_per_square() {
        let squares = vec![square(None), square(Some(vec![house("1", true, Some(1.0))]))];
        assert_eq!(SquareExportRow::from_squares(&squares).len(), 2);
    }
}
