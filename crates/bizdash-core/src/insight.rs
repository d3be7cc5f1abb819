//! 衍生分析結果（每次載入重新計算，不持久化）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryItem;

/// 單一品項的銷售彙總
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesData {
    /// 庫存品項ID
    pub item_id: String,

    /// 品名（第一次出現時的發票明細品名）
    pub item_name: String,

    /// 總銷售數量
    pub total_quantity: u64,

    /// 總營收（明細小計加總）
    pub total_revenue: Decimal,

    /// 出現在發票明細的次數
    pub invoice_count: u32,
}

impl SalesData {
    /// 創建空的銷售彙總
    pub fn new(item_id: String, item_name: String) -> Self {
        Self {
            item_id,
            item_name,
            total_quantity: 0,
            total_revenue: Decimal::ZERO,
            invoice_count: 0,
        }
    }

    /// 累加一筆發票明細
    pub fn record(&mut self, quantity: u32, total: Decimal) {
        self.total_quantity += u64::from(quantity);
        self.total_revenue += total;
        self.invoice_count += 1;
    }
}

/// 單日營收
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// 日曆日
    pub date: NaiveDate,

    /// 營收
    pub revenue: Decimal,

    /// 發票張數
    pub invoices: u32,
}

impl RevenuePoint {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            revenue: Decimal::ZERO,
            invoices: 0,
        }
    }
}

/// 總覽統計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStats {
    pub total_revenue: Decimal,
    pub total_invoices: u32,
    pub total_products: u32,
    pub low_stock_count: u32,
}

/// 補貨預測
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockPrediction {
    /// 原始庫存品項
    #[serde(flatten)]
    pub item: InventoryItem,

    /// 平均日銷量（已四捨五入）
    pub avg_daily_sales: Decimal,

    /// 預計缺貨天數
    pub days_until_stockout: u64,

    /// 是否需要補貨
    pub needs_restock: bool,
}

/// 供應商績效
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierAnalytic {
    pub supplier_id: String,
    pub name: String,
    pub total_orders: u32,

    /// 所有狀態的採購金額（含待收貨與已取消）
    pub total_spend: Decimal,

    pub received_orders: u32,
    pub pending_orders: u32,
    pub cancelled_orders: u32,

    /// 最近一次下單日期
    pub last_order_date: Option<NaiveDate>,

    /// 可靠度：已收貨比例（百分比整數）
    pub reliability: u32,
}

/// 一次儀表板載入的全部衍生視圖
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: TotalStats,
    pub sales: Vec<SalesData>,
    pub low_stock: Vec<InventoryItem>,
    pub revenue: Vec<RevenuePoint>,
    pub suppliers: Vec<SupplierAnalytic>,
    pub restock: Vec<RestockPrediction>,
}

impl Dashboard {
    /// 需要補貨的預測
    pub fn restock_alerts(&self) -> impl Iterator<Item = &RestockPrediction> {
        self.restock.iter().filter(|p| p.needs_restock)
    }
}
