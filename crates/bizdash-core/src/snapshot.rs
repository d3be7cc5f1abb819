//! 資料快照（一次載入取得的四個集合）

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{InventoryItem, Invoice, PurchaseOrder, Supplier};

/// 資料集合名稱
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Invoices,
    InventoryItems,
    PurchaseOrders,
    Suppliers,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Invoices,
        Collection::InventoryItems,
        Collection::PurchaseOrders,
        Collection::Suppliers,
    ];

    /// 後端資料表名稱
    pub fn table_name(&self) -> &'static str {
        match self {
            Collection::Invoices => "invoices",
            Collection::InventoryItems => "inventory_items",
            Collection::PurchaseOrders => "purchase_orders",
            Collection::Suppliers => "suppliers",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// 資料快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub invoices: Vec<Invoice>,
    pub inventory_items: Vec<InventoryItem>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub suppliers: Vec<Supplier>,
}

impl Snapshot {
    /// 創建快照
    pub fn new(
        invoices: Vec<Invoice>,
        inventory_items: Vec<InventoryItem>,
        purchase_orders: Vec<PurchaseOrder>,
        suppliers: Vec<Supplier>,
    ) -> Self {
        Self {
            invoices,
            inventory_items,
            purchase_orders,
            suppliers,
        }
    }

    /// 各集合筆數總和
    pub fn record_count(&self) -> usize {
        self.invoices.len()
            + self.inventory_items.len()
            + self.purchase_orders.len()
            + self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
