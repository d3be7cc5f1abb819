//! 命令列參數

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use bizdash_calc::AnalyticsCalculator;
use bizdash_core::{AnalyticsConfig, Dashboard, DayBoundary, VelocityWindow};
use clap::{Parser, ValueEnum};

/// 要輸出的儀表板視圖
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// 全部視圖
    Full,
    /// 總覽統計
    Stats,
    /// 品項銷售
    Sales,
    /// 低庫存
    LowStock,
    /// 每日營收
    Revenue,
    /// 供應商績效
    Suppliers,
    /// 供應商排行
    TopSuppliers,
    /// 補貨預測
    Restock,
}

/// 由 JSON 快照計算商業智慧儀表板
#[derive(Debug, Parser)]
#[command(name = "bizdash", version, about)]
pub struct Cli {
    /// JSON 快照檔案（包含 invoices、inventoryItems、purchaseOrders、suppliers）
    pub snapshot: PathBuf,

    /// 輸出的視圖
    #[arg(long, value_enum, default_value_t = View::Full)]
    pub view: View,

    /// 營收分桶的時差（分鐘，東正西負）；未指定時使用本地時區
    #[arg(long, env = "BIZDASH_UTC_OFFSET_MINUTES", allow_hyphen_values = true)]
    pub utc_offset_minutes: Option<i32>,

    /// 補貨預警天數
    #[arg(long, default_value_t = 30)]
    pub restock_horizon: u64,

    /// 供應商排行筆數
    #[arg(long, default_value_t = 5)]
    pub top_suppliers: usize,

    /// 只以已付款發票計算銷售速度的觀察天數
    #[arg(long)]
    pub paid_window: bool,

    /// 以縮排格式輸出 JSON
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// 由參數建立分析配置
    pub fn analytics_config(&self) -> Result<AnalyticsConfig> {
        let boundary = match self.utc_offset_minutes {
            Some(minutes) => DayBoundary::from_offset_minutes(minutes)
                .ok_or_else(|| anyhow!("無效的時差: {} 分鐘", minutes))?,
            None => DayBoundary::Local,
        };
        let window = if self.paid_window {
            VelocityWindow::PaidOnly
        } else {
            VelocityWindow::AllInvoices
        };

        Ok(AnalyticsConfig::new()
            .with_day_boundary(boundary)
            .with_velocity_window(window)
            .with_restock_horizon(self.restock_horizon)
            .with_top_suppliers_limit(self.top_suppliers))
    }

    /// 將儀表板的指定視圖轉為 JSON
    pub fn render(&self, dashboard: &Dashboard, calculator: &AnalyticsCalculator) -> Result<String> {
        let value = match self.view {
            View::Full => serde_json::to_value(dashboard)?,
            View::Stats => serde_json::to_value(&dashboard.stats)?,
            View::Sales => serde_json::to_value(&dashboard.sales)?,
            View::LowStock => serde_json::to_value(&dashboard.low_stock)?,
            View::Revenue => serde_json::to_value(&dashboard.revenue)?,
            View::Suppliers => serde_json::to_value(&dashboard.suppliers)?,
            View::TopSuppliers => serde_json::to_value(calculator.top_suppliers(dashboard))?,
            View::Restock => serde_json::to_value(&dashboard.restock)?,
        };

        Ok(if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            value.to_string()
        })
    }
}
