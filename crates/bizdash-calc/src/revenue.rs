//! 營收時間序列（依日曆日分桶）

use std::collections::BTreeMap;

use bizdash_core::{DayBoundary, Invoice, RevenuePoint};
use chrono::NaiveDate;

/// 營收分桶計算器
pub struct RevenueBucketing;

impl RevenueBucketing {
    /// 將已付款發票依建立時間的日曆日分桶，日期由舊到新
    pub fn by_date(invoices: &[Invoice], boundary: &DayBoundary) -> Vec<RevenuePoint> {
        let mut buckets: BTreeMap<NaiveDate, RevenuePoint> = BTreeMap::new();

        for invoice in invoices.iter().filter(|inv| inv.is_paid()) {
            let date = boundary.calendar_day(invoice.created_at);
            let point = buckets
                .entry(date)
                .or_insert_with(|| RevenuePoint::new(date));
            point.revenue += invoice.total;
            point.invoices += 1;
        }

        buckets.into_values().collect()
    }
}
