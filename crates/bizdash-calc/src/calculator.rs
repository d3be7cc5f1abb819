//! 儀表板主計算器

use bizdash_core::{AnalyticsConfig, Dashboard, Snapshot, SupplierAnalytic};

use crate::restock::RestockPredictor;
use crate::revenue::RevenueBucketing;
use crate::sales::SalesCalculator;
use crate::stats::StatsCalculator;
use crate::stock::LowStockDetector;
use crate::supplier::SupplierScorecard;

/// 儀表板計算器
#[derive(Debug, Clone, Default)]
pub struct AnalyticsCalculator {
    /// 分析參數
    config: AnalyticsConfig,
}

impl AnalyticsCalculator {
    /// 創建新的計算器
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// 由一份快照計算全部衍生視圖
    pub fn calculate(&self, snapshot: &Snapshot) -> Dashboard {
        tracing::info!(
            "開始儀表板計算：發票 {} 筆，品項 {} 筆，採購單 {} 筆，供應商 {} 筆",
            snapshot.invoices.len(),
            snapshot.inventory_items.len(),
            snapshot.purchase_orders.len(),
            snapshot.suppliers.len()
        );

        let start_time = std::time::Instant::now();

        tracing::debug!("Step 1: 總覽統計");
        let stats = StatsCalculator::calculate(&snapshot.invoices, &snapshot.inventory_items);

        tracing::debug!("Step 2: 品項銷售");
        let sales = SalesCalculator::calculate(&snapshot.invoices);
        tracing::debug!("有銷售品項: {}", sales.len());

        tracing::debug!("Step 3: 低庫存");
        let low_stock = LowStockDetector::detect(&snapshot.inventory_items);
        tracing::debug!("低庫存品項: {}", low_stock.len());

        tracing::debug!("Step 4: 營收時間序列");
        let revenue = RevenueBucketing::by_date(&snapshot.invoices, &self.config.day_boundary);
        tracing::debug!("營收天數: {}", revenue.len());

        tracing::debug!("Step 5: 供應商績效");
        let suppliers =
            SupplierScorecard::calculate(&snapshot.suppliers, &snapshot.purchase_orders);

        tracing::debug!("Step 6: 補貨預測");
        let restock = RestockPredictor::predict(
            &snapshot.inventory_items,
            &snapshot.invoices,
            &self.config,
        );

        let dashboard = Dashboard {
            stats,
            sales,
            low_stock,
            revenue,
            suppliers,
            restock,
        };

        tracing::info!(
            "儀表板計算完成，耗時 {:?}，需補貨品項 {} 筆",
            start_time.elapsed(),
            dashboard.restock_alerts().count()
        );

        dashboard
    }

    /// 依配置的筆數取儀表板中前幾名供應商
    pub fn top_suppliers<'a>(&self, dashboard: &'a Dashboard) -> &'a [SupplierAnalytic] {
        SupplierScorecard::leaders(&dashboard.suppliers, self.config.top_suppliers_limit)
    }

    /// 獲取分析參數引用
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }
}
