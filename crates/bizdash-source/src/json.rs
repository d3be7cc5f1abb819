//! JSON 快照檔案資料來源

use std::path::{Path, PathBuf};

use bizdash_core::{
    Collection, DashboardError, InventoryItem, Invoice, PurchaseOrder, Result, Snapshot, Supplier,
};
use serde::Deserialize;

use crate::source::DataSource;

/// 檔案內容；缺少的集合視為資料表尚未建立
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotFile {
    invoices: Option<Vec<Invoice>>,
    inventory_items: Option<Vec<InventoryItem>>,
    purchase_orders: Option<Vec<PurchaseOrder>>,
    suppliers: Option<Vec<Supplier>>,
}

/// JSON 快照檔案資料來源
///
/// 每次讀取都重新解析檔案，因此重新整理時能看到檔案的最新內容。
/// 整份快照只讀取並解析檔案一次，四個集合必定來自同一版本的檔案。
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    /// 創建新的檔案資料來源
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 檔案路徑
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<SnapshotFile> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn require<T>(collection: Collection, records: Option<Vec<T>>) -> Result<Vec<T>> {
        records.ok_or_else(|| DashboardError::SchemaNotProvisioned {
            collection,
            message: format!("Could not find the table '{}' in the snapshot", collection),
        })
    }
}

impl DataSource for JsonSnapshotSource {
    fn list_invoices(&self) -> Result<Vec<Invoice>> {
        Self::require(Collection::Invoices, self.load()?.invoices)
    }

    fn list_inventory_items(&self) -> Result<Vec<InventoryItem>> {
        Self::require(Collection::InventoryItems, self.load()?.inventory_items)
    }

    fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrder>> {
        Self::require(Collection::PurchaseOrders, self.load()?.purchase_orders)
    }

    fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        Self::require(Collection::Suppliers, self.load()?.suppliers)
    }

    fn load_snapshot(&self) -> Result<Snapshot> {
        let file = self.load()?;
        Ok(Snapshot::new(
            Self::require(Collection::Invoices, file.invoices)?,
            Self::require(Collection::InventoryItems, file.inventory_items)?,
            Self::require(Collection::PurchaseOrders, file.purchase_orders)?,
            Self::require(Collection::Suppliers, file.suppliers)?,
        ))
    }
}
