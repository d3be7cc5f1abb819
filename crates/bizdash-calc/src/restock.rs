//! 補貨預測（以銷售速度線性推估缺貨天數）

use std::collections::HashMap;

use bizdash_core::calendar::days_covered;
use bizdash_core::{AnalyticsConfig, InventoryItem, Invoice, RestockPrediction, VelocityWindow};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// 補貨預測器
pub struct RestockPredictor;

impl RestockPredictor {
    /// 為每個庫存品項計算平均日銷量、預計缺貨天數與補貨旗標
    ///
    /// 輸出與輸入品項一一對應且順序相同，沒有銷售紀錄的品項也會出現。
    pub fn predict(
        items: &[InventoryItem],
        invoices: &[Invoice],
        config: &AnalyticsConfig,
    ) -> Vec<RestockPrediction> {
        let days = Self::observed_days(invoices, config.velocity_window);
        let sold = Self::units_sold(invoices);

        tracing::debug!(
            "補貨預測：品項 {} 筆，觀察天數 {}，有銷售品項 {} 筆",
            items.len(),
            days,
            sold.len()
        );

        items
            .iter()
            .map(|item| {
                let total_sold = sold.get(item.id.as_str()).copied().unwrap_or(0);
                Self::predict_item(item, total_sold, days, config)
            })
            .collect()
    }

    /// 單一品項預測
    fn predict_item(
        item: &InventoryItem,
        total_sold: u64,
        days: u32,
        config: &AnalyticsConfig,
    ) -> RestockPrediction {
        let avg_daily_sales = (Decimal::from(total_sold) / Decimal::from(days))
            .round_dp_with_strategy(config.velocity_decimals, RoundingStrategy::MidpointAwayFromZero);

        // stock / (sold / days) 以整數運算避免除法誤差
        let days_until_stockout = if total_sold > 0 {
            u64::from(item.stock) * u64::from(days) / total_sold
        } else {
            config.no_velocity_sentinel
        };

        let needs_restock =
            days_until_stockout < config.restock_horizon_days || item.is_low_stock();

        RestockPrediction {
            item: item.clone(),
            avg_daily_sales,
            days_until_stockout,
            needs_restock,
        }
    }

    /// 觀察區間天數；沒有發票時視為 1 天
    pub fn observed_days(invoices: &[Invoice], window: VelocityWindow) -> u32 {
        let stamps = invoices
            .iter()
            .filter(|inv| window == VelocityWindow::AllInvoices || inv.is_paid())
            .map(|inv| inv.created_at);

        match Self::date_range(stamps) {
            Some((oldest, newest)) => days_covered(oldest, newest),
            None => 1,
        }
    }

    fn date_range(
        stamps: impl Iterator<Item = DateTime<Utc>>,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        stamps.fold(None, |range, stamp| match range {
            None => Some((stamp, stamp)),
            Some((oldest, newest)) => Some((oldest.min(stamp), newest.max(stamp))),
        })
    }

    /// 已付款發票中各品項的銷售數量
    fn units_sold(invoices: &[Invoice]) -> HashMap<&str, u64> {
        let mut sold: HashMap<&str, u64> = HashMap::new();
        for invoice in invoices.iter().filter(|inv| inv.is_paid()) {
            for line in &invoice.items {
                *sold.entry(line.inventory_item_id.as_str()).or_insert(0) += u64::from(line.quantity);
            }
        }
        sold
    }
}
