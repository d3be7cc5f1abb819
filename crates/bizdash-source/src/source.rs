//! 資料存取邊界

use bizdash_core::{InventoryItem, Invoice, PurchaseOrder, Result, Snapshot, Supplier};

use crate::loader::SnapshotLoader;

/// 外部資料來源
///
/// 租戶範圍由資料來源自行處理（例如資料列層級安全性），
/// 呼叫端一律讀取完整集合，不假設任何排序。
pub trait DataSource: Send + Sync {
    /// 讀取所有發票
    fn list_invoices(&self) -> Result<Vec<Invoice>>;

    /// 讀取所有庫存品項
    fn list_inventory_items(&self) -> Result<Vec<InventoryItem>>;

    /// 讀取所有採購單
    fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrder>>;

    /// 讀取所有供應商
    fn list_suppliers(&self) -> Result<Vec<Supplier>>;

    /// 讀取一份完整快照
    ///
    /// 預設並行呼叫四個 `list_*`；能一次取得一致內容的來源應覆寫此方法。
    fn load_snapshot(&self) -> Result<Snapshot> {
        SnapshotLoader::read_concurrently(self)
    }
}

impl<T: DataSource + ?Sized> DataSource for std::sync::Arc<T> {
    fn list_invoices(&self) -> Result<Vec<Invoice>> {
        (**self).list_invoices()
    }

    fn list_inventory_items(&self) -> Result<Vec<InventoryItem>> {
        (**self).list_inventory_items()
    }

    fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrder>> {
        (**self).list_purchase_orders()
    }

    fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        (**self).list_suppliers()
    }

    fn load_snapshot(&self) -> Result<Snapshot> {
        (**self).load_snapshot()
    }
}
