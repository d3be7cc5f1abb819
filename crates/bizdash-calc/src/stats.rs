//! 總覽統計

use bizdash_core::{InventoryItem, Invoice, TotalStats};

/// 總覽統計計算器
pub struct StatsCalculator;

impl StatsCalculator {
    /// 單次掃描兩個集合計算總覽統計
    pub fn calculate(invoices: &[Invoice], items: &[InventoryItem]) -> TotalStats {
        let mut stats = TotalStats::default();

        for invoice in invoices.iter().filter(|inv| inv.is_paid()) {
            stats.total_revenue += invoice.total;
            stats.total_invoices += 1;
        }

        for item in items {
            stats.total_products += 1;
            if item.is_low_stock() {
                stats.low_stock_count += 1;
            }
        }

        stats
    }
}
