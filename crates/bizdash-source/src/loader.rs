//! 快照載入器

use bizdash_core::{InventoryItem, Invoice, PurchaseOrder, Result, Snapshot, Supplier};

use crate::source::DataSource;

/// 快照載入器
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// 載入一份完整快照
    ///
    /// 任一讀取失敗即放棄整次載入，錯誤原樣回傳，不會產生部分快照。
    /// 實際讀取方式由 [`DataSource::load_snapshot`] 決定：預設同時發出四個讀取，
    /// 檔案類來源則一次讀入全部集合。
    pub fn load<S: DataSource + ?Sized>(source: &S) -> Result<Snapshot> {
        let start_time = std::time::Instant::now();

        let snapshot = source.load_snapshot().map_err(|error| {
            tracing::warn!("快照載入失敗 ({}): {}", error.kind().as_str(), error);
            error
        })?;

        tracing::debug!(
            "快照載入完成：{} 筆紀錄，耗時 {:?}",
            snapshot.record_count(),
            start_time.elapsed()
        );

        Ok(snapshot)
    }

    /// 以 rayon 並行呼叫四個 `list_*` 讀取並等待全部完成
    pub fn read_concurrently<S: DataSource + ?Sized>(source: &S) -> Result<Snapshot> {
        let ((invoices, inventory_items), (purchase_orders, suppliers)) = rayon::join(
            || rayon::join(|| source.list_invoices(), || source.list_inventory_items()),
            || rayon::join(|| source.list_purchase_orders(), || source.list_suppliers()),
        );

        Self::assemble(invoices, inventory_items, purchase_orders, suppliers)
    }

    fn assemble(
        invoices: Result<Vec<Invoice>>,
        inventory_items: Result<Vec<InventoryItem>>,
        purchase_orders: Result<Vec<PurchaseOrder>>,
        suppliers: Result<Vec<Supplier>>,
    ) -> Result<Snapshot> {
        Ok(Snapshot::new(invoices?, inventory_items?, purchase_orders?, suppliers?))
    }
}
