//! # BizDash
//!
//! 小型企業營運主控台的商業智慧儀表板：由發票、庫存、採購單與供應商紀錄
//! 推導銷售、營收、補貨預測與供應商績效。

pub mod cli;
pub mod logging;

pub use bizdash_calc as engine;
pub use bizdash_core as model;
pub use bizdash_source as source;

// Re-export 主要類型
pub use bizdash_calc::AnalyticsCalculator;
pub use bizdash_core::{AnalyticsConfig, Dashboard, DashboardError, DayBoundary, Snapshot};
pub use bizdash_source::{DashboardService, DataSource, InMemorySource, JsonSnapshotSource};
