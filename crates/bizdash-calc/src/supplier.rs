//! 供應商績效評分

use std::collections::HashMap;

use bizdash_core::{PurchaseOrder, PurchaseOrderStatus, Supplier, SupplierAnalytic};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// 找不到供應商名稱時的顯示值
pub const UNKNOWN_SUPPLIER: &str = "Unknown";

/// 單一供應商的累加器
#[derive(Debug)]
struct SupplierTally {
    supplier_id: String,
    name: Option<String>,
    total_orders: u32,
    total_spend: Decimal,
    received_orders: u32,
    pending_orders: u32,
    cancelled_orders: u32,
    last_order_date: Option<NaiveDate>,
}

impl SupplierTally {
    fn new(supplier_id: String) -> Self {
        Self {
            supplier_id,
            name: None,
            total_orders: 0,
            total_spend: Decimal::ZERO,
            received_orders: 0,
            pending_orders: 0,
            cancelled_orders: 0,
            last_order_date: None,
        }
    }

    /// 名稱取該供應商第一張帶有非空 `supplier_name` 的採購單，
    /// 全部沒有時於 [`finish`](Self::finish) 改用供應商紀錄的名稱
    fn record(&mut self, po: &PurchaseOrder) {
        if self.name.is_none() {
            self.name = po.supplier_name.clone().filter(|n| !n.is_empty());
        }

        self.total_orders += 1;
        self.total_spend += po.total_amount;
        match po.status {
            PurchaseOrderStatus::Received => self.received_orders += 1,
            PurchaseOrderStatus::Pending => self.pending_orders += 1,
            PurchaseOrderStatus::Cancelled => self.cancelled_orders += 1,
        }
        self.last_order_date = self.last_order_date.max(Some(po.order_date));
    }

    fn finish(self, suppliers: &HashMap<&str, &Supplier>) -> SupplierAnalytic {
        let name = self
            .name
            .or_else(|| suppliers.get(self.supplier_id.as_str()).map(|s| s.name.clone()))
            .unwrap_or_else(|| UNKNOWN_SUPPLIER.to_string());
        let reliability = SupplierScorecard::reliability(self.received_orders, self.total_orders);

        SupplierAnalytic {
            supplier_id: self.supplier_id,
            name,
            total_orders: self.total_orders,
            total_spend: self.total_spend,
            received_orders: self.received_orders,
            pending_orders: self.pending_orders,
            cancelled_orders: self.cancelled_orders,
            last_order_date: self.last_order_date,
            reliability,
        }
    }
}

/// 供應商績效計算器
pub struct SupplierScorecard;

impl SupplierScorecard {
    /// 依採購單的供應商ID分組計算績效，依總採購金額由高到低排序
    ///
    /// 分組以採購單上的供應商ID為準，即使供應商紀錄已刪除仍會出現。
    /// 名稱優先順序：採購單上第一個非空的供應商名稱、供應商紀錄名稱、`"Unknown"`。
    /// 金額相同時保留第一次出現的順序。
    pub fn calculate(suppliers: &[Supplier], purchase_orders: &[PurchaseOrder]) -> Vec<SupplierAnalytic> {
        let directory: HashMap<&str, &Supplier> =
            suppliers.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut tallies: Vec<SupplierTally> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for po in purchase_orders {
            let slot = *index.entry(po.supplier_id.as_str()).or_insert_with(|| {
                tallies.push(SupplierTally::new(po.supplier_id.clone()));
                tallies.len() - 1
            });
            tallies[slot].record(po);
        }

        let mut analytics: Vec<SupplierAnalytic> = tallies
            .into_iter()
            .map(|tally| tally.finish(&directory))
            .collect();
        analytics.sort_by(|a, b| b.total_spend.cmp(&a.total_spend));
        analytics
    }

    /// 總採購金額前 N 名的供應商
    pub fn top(
        suppliers: &[Supplier],
        purchase_orders: &[PurchaseOrder],
        limit: usize,
    ) -> Vec<SupplierAnalytic> {
        Self::leaders(&Self::calculate(suppliers, purchase_orders), limit).to_vec()
    }

    /// 已排序績效清單的前 N 名
    pub fn leaders(analytics: &[SupplierAnalytic], limit: usize) -> &[SupplierAnalytic] {
        &analytics[..limit.min(analytics.len())]
    }

    /// 已收貨比例（四捨五入為整數百分比），無訂單時為 0
    pub fn reliability(received: u32, total: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        let (received, total) = (u64::from(received), u64::from(total));
        // floor(100 × r / t + 0.5)
        ((200 * received + total) / (2 * total)) as u32
    }
}
