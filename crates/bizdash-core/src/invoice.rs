//! 發票模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 發票狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// 草稿
    Draft,
    /// 已付款
    Paid,
    /// 已作廢
    Cancelled,
}

/// 發票明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// 明細ID
    #[serde(default)]
    pub id: String,

    /// 對應的庫存品項ID
    pub inventory_item_id: String,

    /// 品名（開立當下的快照）
    pub name: String,

    /// 料號
    #[serde(default)]
    pub sku: String,

    /// 數量
    pub quantity: u32,

    /// 單價
    pub price: Decimal,

    /// 折扣（百分比）
    #[serde(default)]
    pub discount: Decimal,

    /// 小計（已扣折扣）
    pub total: Decimal,
}

impl InvoiceItem {
    /// 創建新的發票明細，小計依數量、單價與折扣計算
    pub fn new(inventory_item_id: String, name: String, quantity: u32, price: Decimal) -> Self {
        let mut item = Self {
            id: Uuid::new_v4().to_string(),
            inventory_item_id,
            name,
            sku: String::new(),
            quantity,
            price,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
        };
        item.total = item.computed_total();
        item
    }

    /// 建構器模式：設置折扣並重新計算小計
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self.total = self.computed_total();
        self
    }

    /// 建構器模式：直接指定小計（沿用後端儲存的數值）
    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    /// 依數量、單價與折扣計算小計
    pub fn computed_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price * (Decimal::ONE_HUNDRED - self.discount)
            / Decimal::ONE_HUNDRED
    }
}

/// 發票
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// 發票ID
    pub id: String,

    /// 發票號碼
    pub invoice_number: String,

    /// 客戶名稱
    #[serde(default)]
    pub customer_name: String,

    /// 客戶信箱
    #[serde(default)]
    pub customer_email: String,

    /// 客戶電話
    #[serde(default)]
    pub customer_phone: String,

    /// 明細
    #[serde(default)]
    pub items: Vec<InvoiceItem>,

    /// 小計
    #[serde(default)]
    pub subtotal: Decimal,

    /// 稅額
    #[serde(default)]
    pub tax: Decimal,

    /// 整單折扣
    #[serde(default)]
    pub discount: Decimal,

    /// 總額
    pub total: Decimal,

    /// 狀態
    pub status: InvoiceStatus,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 更新時間
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// 創建新的發票
    pub fn new(invoice_number: String, status: InvoiceStatus, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            invoice_number,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
            status,
            created_at,
            updated_at: created_at,
        }
    }

    /// 建構器模式：設置客戶
    pub fn with_customer(mut self, name: String, email: String) -> Self {
        self.customer_name = name;
        self.customer_email = email;
        self
    }

    /// 建構器模式：設置明細，小計與總額以明細加總
    pub fn with_items(mut self, items: Vec<InvoiceItem>) -> Self {
        self.items = items;
        self.subtotal = self.items.iter().map(|i| i.total).sum();
        self.total = self.subtotal + self.tax - self.discount;
        self
    }

    /// 建構器模式：設置稅額
    pub fn with_tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
        self.total = self.subtotal + self.tax - self.discount;
        self
    }

    /// 建構器模式：直接指定總額
    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    /// 檢查是否已付款（只有已付款發票計入營收）
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }

    /// 總銷售數量
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
