//! # BizDash Source
//!
//! 資料存取邊界：資料來源介面、快照載入與儀表板服務

pub mod json;
pub mod loader;
pub mod memory;
pub mod service;
pub mod source;

// Re-export 主要類型
pub use json::JsonSnapshotSource;
pub use loader::SnapshotLoader;
pub use memory::InMemorySource;
pub use service::{DashboardService, LoadTicket};
pub use source::DataSource;
