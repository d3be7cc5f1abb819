//! 採購單模型

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 採購單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    /// 待收貨
    Pending,
    /// 已收貨
    Received,
    /// 已取消
    Cancelled,
}

/// 採購單明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    /// 庫存品項ID
    pub product_id: String,

    /// 品名
    #[serde(default)]
    pub product_name: String,

    /// 數量
    pub quantity: u32,

    /// 單價
    pub unit_price: Decimal,

    /// 小計
    #[serde(default)]
    pub total: Decimal,
}

impl PurchaseOrderItem {
    /// 創建新的採購明細
    pub fn new(product_id: String, product_name: String, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            product_id,
            product_name,
            quantity,
            unit_price,
            total: Decimal::from(quantity) * unit_price,
        }
    }

    /// 數量 × 單價
    pub fn computed_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// 採購單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    /// 採購單ID
    pub id: String,

    /// 採購單號
    pub po_number: String,

    /// 供應商ID（參照，供應商可能已被刪除）
    pub supplier_id: String,

    /// 供應商名稱（反正規化欄位）
    #[serde(default)]
    pub supplier_name: Option<String>,

    /// 下單日期
    pub order_date: NaiveDate,

    /// 預計到貨日期
    #[serde(default)]
    pub expected_delivery_date: Option<NaiveDate>,

    /// 實際收貨時間
    #[serde(default)]
    pub received_date: Option<DateTime<Utc>>,

    /// 狀態
    pub status: PurchaseOrderStatus,

    /// 明細
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,

    /// 總金額
    pub total_amount: Decimal,

    /// 備註
    #[serde(default)]
    pub notes: Option<String>,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 更新時間
    pub updated_at: DateTime<Utc>,
}

impl PurchaseOrder {
    /// 創建新的採購單
    pub fn new(supplier_id: String, order_date: NaiveDate, status: PurchaseOrderStatus) -> Self {
        let now = Utc::now();
        let id = Uuid::new_v4();
        Self {
            po_number: format!("PO-{}", &id.simple().to_string()[..8].to_uppercase()),
            id: id.to_string(),
            supplier_id,
            supplier_name: None,
            order_date,
            expected_delivery_date: None,
            received_date: None,
            status,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 建構器模式：設置採購單號
    pub fn with_po_number(mut self, po_number: String) -> Self {
        self.po_number = po_number;
        self
    }

    /// 建構器模式：設置供應商名稱
    pub fn with_supplier_name(mut self, name: String) -> Self {
        self.supplier_name = Some(name);
        self
    }

    /// 建構器模式：設置預計到貨日期
    pub fn with_expected_delivery_date(mut self, date: NaiveDate) -> Self {
        self.expected_delivery_date = Some(date);
        self
    }

    /// 建構器模式：設置明細，總金額以明細加總
    pub fn with_items(mut self, items: Vec<PurchaseOrderItem>) -> Self {
        self.items = items;
        self.total_amount = self.computed_total();
        self
    }

    /// 建構器模式：直接指定總金額
    pub fn with_total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    /// 標記為已收貨
    pub fn mark_received(&mut self, received_at: DateTime<Utc>) {
        self.status = PurchaseOrderStatus::Received;
        self.received_date = Some(received_at);
        self.updated_at = received_at;
    }

    /// 明細小計加總
    pub fn computed_total(&self) -> Decimal {
        self.items.iter().map(PurchaseOrderItem::computed_total).sum()
    }

    pub fn is_received(&self) -> bool {
        self.status == PurchaseOrderStatus::Received
    }

    pub fn is_pending(&self) -> bool {
        self.status == PurchaseOrderStatus::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == PurchaseOrderStatus::Cancelled
    }
}
