//! Squares spreadsheet export.

use chrono::NaiveDate;
use contracts::domain::a002_square::SquareExportRow;

use super::api;
use crate::shared::date_utils::{format_date, today_utc};
use crate::shared::export::{export_to_excel, CellValue, ExcelExportable};

pub const EXPORT_SHEET_NAME: &str = "بيانات المربعات";
pub const EXPORT_FAILED: &str = "حدث خطأ في تصدير البيانات";

impl ExcelExportable for SquareExportRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "اسم المربع",
            "الحي",
            "عدد المنازل",
            "المنازل المدفوعة",
            "المنازل غير المدفوعة",
            "إجمالي الإيرادات",
            "تاريخ الإنشاء",
        ]
    }

    fn to_row(&self) -> Vec<CellValue> {
        vec![
            self.square_name.clone().into(),
            self.neighborhood_name.clone().into(),
            self.house_count.into(),
            self.paid_count.into(),
            self.unpaid_count.into(),
            self.total_revenue.into(),
            format_date(&self.created_at).into(),
        ]
    }
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("squares-data-{}.xlsx", date.format("%Y-%m-%d"))
}

/// Fetches the export payload and downloads it as a workbook.
pub async fn export_squares() -> Result<(), String> {
    let squares = api::fetch_export_data()
        .await
        .map_err(|e| e.to_string())?;
    let rows = SquareExportRow::from_squares(&squares);
    export_to_excel(&rows, EXPORT_SHEET_NAME, &export_file_name(today_utc()))
}
