//! 記憶體資料來源

use std::collections::HashMap;
use std::sync::RwLock;

use bizdash_core::{
    Collection, DashboardError, InventoryItem, Invoice, PurchaseOrder, Result, Snapshot, Supplier,
};

use crate::source::DataSource;

/// 模擬的後端失敗
#[derive(Debug, Clone)]
struct InjectedFailure {
    code: Option<String>,
    message: String,
}

/// 記憶體資料來源
///
/// 以快照內容回應讀取，可針對單一集合注入失敗。
#[derive(Debug, Default)]
pub struct InMemorySource {
    snapshot: RwLock<Snapshot>,
    failures: RwLock<HashMap<Collection, InjectedFailure>>,
}

impl InMemorySource {
    /// 創建新的記憶體資料來源
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            failures: RwLock::new(HashMap::new()),
        }
    }

    /// 建構器模式：讓某個集合的讀取失敗
    pub fn with_failure(self, collection: Collection, code: Option<&str>, message: &str) -> Self {
        self.fail(collection, code, message);
        self
    }

    /// 讓某個集合的讀取失敗
    pub fn fail(&self, collection: Collection, code: Option<&str>, message: &str) {
        let failure = InjectedFailure {
            code: code.map(str::to_string),
            message: message.to_string(),
        };
        self.failures
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(collection, failure);
    }

    /// 清除所有注入的失敗
    pub fn recover(&self) {
        self.failures.write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// 替換整份快照
    pub fn replace(&self, snapshot: Snapshot) {
        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = snapshot;
    }

    fn read<T: Clone>(&self, collection: Collection, pick: impl FnOnce(&Snapshot) -> &Vec<T>) -> Result<Vec<T>> {
        if let Some(failure) = self
            .failures
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&collection)
        {
            return Err(DashboardError::classify(
                collection,
                failure.code.as_deref(),
                failure.message.clone(),
            ));
        }

        let snapshot = self.snapshot.read().unwrap_or_else(|e| e.into_inner());
        Ok(pick(&snapshot).clone())
    }
}

impl DataSource for InMemorySource {
    fn list_invoices(&self) -> Result<Vec<Invoice>> {
        self.read(Collection::Invoices, |s| &s.invoices)
    }

    fn list_inventory_items(&self) -> Result<Vec<InventoryItem>> {
        self.read(Collection::InventoryItems, |s| &s.inventory_items)
    }

    fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrder>> {
        self.read(Collection::PurchaseOrders, |s| &s.purchase_orders)
    }

    fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        self.read(Collection::Suppliers, |s| &s.suppliers)
    }
}
