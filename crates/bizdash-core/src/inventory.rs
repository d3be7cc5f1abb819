//! 庫存品項模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存品項
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// 品項ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 描述
    #[serde(default)]
    pub description: String,

    /// 料號
    #[serde(default)]
    pub sku: String,

    /// 分類
    #[serde(default)]
    pub category: String,

    /// 單價
    pub price: Decimal,

    /// 折扣（百分比 0-100）
    #[serde(default)]
    pub discount: Decimal,

    /// 現有庫存
    pub stock: u32,

    /// 補貨門檻
    pub min_stock: u32,

    /// 圖片網址
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 更新時間
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// 創建新的庫存品項
    pub fn new(id: String, name: String, stock: u32, min_stock: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: String::new(),
            sku: String::new(),
            category: String::new(),
            price: Decimal::ZERO,
            discount: Decimal::ZERO,
            stock,
            min_stock,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 建構器模式：設置料號
    pub fn with_sku(mut self, sku: String) -> Self {
        self.sku = sku;
        self
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: String) -> Self {
        self.category = category;
        self
    }

    /// 建構器模式：設置單價
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// 建構器模式：設置折扣，超出 0-100 的值會被截斷
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        self
    }

    /// 建構器模式：設置建立時間
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// 檢查是否低於（或等於）補貨門檻
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// 折扣後單價
    pub fn discounted_price(&self) -> Decimal {
        self.price * (Decimal::ONE_HUNDRED - self.discount) / Decimal::ONE_HUNDRED
    }

    /// 補足到門檻所需數量
    pub fn shortfall(&self) -> u32 {
        self.min_stock.saturating_sub(self.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_item() {
        let item = InventoryItem::new("ITEM-001".to_string(), "Espresso Beans".to_string(), 40, 10);

        assert_eq!(item.id, "ITEM-001");
        assert_eq!(item.stock, 40);
        assert_eq!(item.min_stock, 10);
        assert_eq!(item.discount, Decimal::ZERO);
        assert!(!item.is_low_stock());
        assert_eq!(item.shortfall(), 0);
    }

    #[test]
    fn test_low_stock_is_inclusive() {
        let at_threshold = InventoryItem::new("A".to_string(), "A".to_string(), 5, 5);
        let below = InventoryItem::new("B".to_string(), "B".to_string(), 2, 5);

        assert!(at_threshold.is_low_stock());
        assert!(below.is_low_stock());
        assert_eq!(below.shortfall(), 3);
    }

    #[test]
    fn test_discounted_price() {
        let item = InventoryItem::new("MUG-01".to_string(), "Mug".to_string(), 10, 2)
            .with_price(Decimal::new(2500, 2))
            .with_discount(Decimal::from(20));

        assert_eq!(item.discounted_price(), Decimal::from(20));
    }

    #[test]
    fn test_discount_is_clamped() {
        let item = InventoryItem::new("X".to_string(), "X".to_string(), 1, 0)
            .with_discount(Decimal::from(150));

        assert_eq!(item.discount, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "X",
            "name": "Filter Paper",
            "sku": "FP-100",
            "category": "Supplies",
            "price": "4.50",
            "discount": "0",
            "stock": 3,
            "minStock": 5,
            "createdAt": "2025-03-01T08:00:00Z",
            "updatedAt": "2025-03-02T08:00:00Z"
        }"#;

        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.min_stock, 5);
        assert_eq!(item.price, Decimal::new(450, 2));
        assert!(item.is_low_stock());
        assert!(item.image_url.is_none());
    }
}
