//! # BizDash Calculation Engine
//!
//! 由發票、庫存、採購單與供應商紀錄推導儀表板視圖的聚合引擎。
//! 所有計算都是純函數：相同快照必定得到相同結果，且不會失敗。

pub mod calculator;
pub mod restock;
pub mod revenue;
pub mod sales;
pub mod stats;
pub mod stock;
pub mod supplier;

// Re-export 主要類型
pub use calculator::AnalyticsCalculator;
pub use restock::RestockPredictor;
pub use revenue::RevenueBucketing;
pub use sales::SalesCalculator;
pub use stats::StatsCalculator;
pub use stock::LowStockDetector;
pub use supplier::{SupplierScorecard, UNKNOWN_SUPPLIER};

use bizdash_core::{
    AnalyticsConfig, DayBoundary, InventoryItem, Invoice, PurchaseOrder, RestockPrediction,
    RevenuePoint, SalesData, Supplier, SupplierAnalytic, TotalStats,
};

/// 供應商排行預設筆數
pub const DEFAULT_TOP_SUPPLIERS: usize = 5;

/// 品項銷售彙總（只計已付款發票，依營收由高到低）
pub fn calculate_sales_data(invoices: &[Invoice]) -> Vec<SalesData> {
    SalesCalculator::calculate(invoices)
}

/// 營收前 N 名品項
pub fn top_products(sales: &[SalesData], limit: usize) -> &[SalesData] {
    SalesCalculator::top(sales, limit)
}

/// 低庫存品項（庫存由少到多）
pub fn get_low_stock_items(items: &[InventoryItem]) -> Vec<InventoryItem> {
    LowStockDetector::detect(items)
}

/// 每日營收序列
pub fn calculate_revenue_by_date(invoices: &[Invoice], boundary: &DayBoundary) -> Vec<RevenuePoint> {
    RevenueBucketing::by_date(invoices, boundary)
}

/// 總覽統計
pub fn calculate_total_stats(invoices: &[Invoice], items: &[InventoryItem]) -> TotalStats {
    StatsCalculator::calculate(invoices, items)
}

/// 補貨預測
pub fn calculate_restock_predictions(
    items: &[InventoryItem],
    invoices: &[Invoice],
    config: &AnalyticsConfig,
) -> Vec<RestockPrediction> {
    RestockPredictor::predict(items, invoices, config)
}

/// 供應商績效（依總採購金額由高到低）
pub fn calculate_supplier_analytics(
    suppliers: &[Supplier],
    purchase_orders: &[PurchaseOrder],
) -> Vec<SupplierAnalytic> {
    SupplierScorecard::calculate(suppliers, purchase_orders)
}

/// 總採購金額前 N 名供應商，`limit` 為 None 時取 5 筆
pub fn top_suppliers(
    suppliers: &[Supplier],
    purchase_orders: &[PurchaseOrder],
    limit: Option<usize>,
) -> Vec<SupplierAnalytic> {
    SupplierScorecard::top(suppliers, purchase_orders, limit.unwrap_or(DEFAULT_TOP_SUPPLIERS))
}

#[cfg(test)]
pub(crate) mod test_support {
    use bizdash_core::{
        InventoryItem, Invoice, InvoiceItem, InvoiceStatus, PurchaseOrder, PurchaseOrderStatus,
    };
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;

    pub fn line(item_id: &str, quantity: u32, total: i64) -> InvoiceItem {
        InvoiceItem::new(item_id.to_string(), format!("Item {item_id}"), quantity, Decimal::ZERO)
            .with_total(Decimal::from(total))
    }

    /// 2025-10-{day} 12:00 UTC 建立的發票
    pub fn invoice(status: InvoiceStatus, day: u32, items: Vec<InvoiceItem>) -> Invoice {
        invoice_at(status, Utc.with_ymd_and_hms(2025, 10, day, 12, 0, 0).unwrap(), items)
    }

    pub fn invoice_at(status: InvoiceStatus, created_at: DateTime<Utc>, items: Vec<InvoiceItem>) -> Invoice {
        Invoice::new(format!("INV-{}", created_at.timestamp()), status, created_at).with_items(items)
    }

    pub fn item(id: &str, stock: u32, min_stock: u32) -> InventoryItem {
        InventoryItem::new(id.to_string(), format!("Item {id}"), stock, min_stock)
    }

    pub fn po(supplier_id: &str, amount: i64, status: PurchaseOrderStatus, day: u32) -> PurchaseOrder {
        PurchaseOrder::new(
            supplier_id.to_string(),
            NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            status,
        )
        .with_total_amount(Decimal::from(amount))
    }
}
