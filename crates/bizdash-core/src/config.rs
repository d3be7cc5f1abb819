//! 分析參數配置

use crate::calendar::DayBoundary;

/// 銷售速度的觀察區間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VelocityWindow {
    /// 以所有發票（含草稿與作廢）的建立時間決定天數
    ///
    /// 數量只加總已付款發票；較寬的區間會讓速度略為平滑。
    #[default]
    AllInvoices,
    /// 只以已付款發票的建立時間決定天數
    PaidOnly,
}

/// 分析參數配置
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// 補貨預警天數：預計缺貨天數小於此值即需補貨
    pub restock_horizon_days: u64,

    /// 無銷售速度時的缺貨天數哨兵值
    pub no_velocity_sentinel: u64,

    /// 平均日銷量的小數位數
    pub velocity_decimals: u32,

    /// 供應商排行預設筆數
    pub top_suppliers_limit: usize,

    /// 銷售速度觀察區間
    pub velocity_window: VelocityWindow,

    /// 營收分桶的日界線
    pub day_boundary: DayBoundary,
}

impl AnalyticsConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            restock_horizon_days: 30,
            no_velocity_sentinel: 999,
            velocity_decimals: 2,
            top_suppliers_limit: 5,
            velocity_window: VelocityWindow::AllInvoices,
            day_boundary: DayBoundary::Local,
        }
    }

    /// 建構器模式：設置補貨預警天數
    pub fn with_restock_horizon(mut self, days: u64) -> Self {
        self.restock_horizon_days = days;
        self
    }

    /// 建構器模式：設置無銷售速度哨兵值
    pub fn with_no_velocity_sentinel(mut self, sentinel: u64) -> Self {
        self.no_velocity_sentinel = sentinel;
        self
    }

    /// 建構器模式：設置平均日銷量小數位數
    pub fn with_velocity_decimals(mut self, decimals: u32) -> Self {
        self.velocity_decimals = decimals;
        self
    }

    /// 建構器模式：設置供應商排行筆數
    pub fn with_top_suppliers_limit(mut self, limit: usize) -> Self {
        self.top_suppliers_limit = limit;
        self
    }

    /// 建構器模式：設置銷售速度觀察區間
    pub fn with_velocity_window(mut self, window: VelocityWindow) -> Self {
        self.velocity_window = window;
        self
    }

    /// 建構器模式：設置日界線
    ///
    /// # 範例
    /// ```
    /// # use bizdash_core::{AnalyticsConfig, DayBoundary};
    /// let config = AnalyticsConfig::new().with_day_boundary(DayBoundary::utc());
    /// assert_eq!(config.day_boundary, DayBoundary::utc());
    /// ```
    pub fn with_day_boundary(mut self, boundary: DayBoundary) -> Self {
        self.day_boundary = boundary;
        self
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self::new()
    }
}
