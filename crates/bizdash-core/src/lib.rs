//! # BizDash Core
//!
//! 核心資料模型與類型定義

pub mod calendar;
pub mod config;
pub mod insight;
pub mod inventory;
pub mod invoice;
pub mod purchase_order;
pub mod snapshot;
pub mod supplier;

// Re-export 主要類型
pub use calendar::DayBoundary;
pub use config::{AnalyticsConfig, VelocityWindow};
pub use insight::{Dashboard, RestockPrediction, RevenuePoint, SalesData, SupplierAnalytic, TotalStats};
pub use inventory::InventoryItem;
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus};
pub use purchase_order::{PurchaseOrder, PurchaseOrderItem, PurchaseOrderStatus};
pub use snapshot::{Collection, Snapshot};
pub use supplier::Supplier;

/// 資料存取失敗時，提供給呈現層判斷的錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 後端資料表尚未建立
    DatabaseNotSetup,
    /// 其他未知錯誤
    UnknownError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DatabaseNotSetup => "database_not_setup",
            ErrorKind::UnknownError => "unknown_error",
        }
    }
}

/// 儀表板錯誤類型
///
/// 聚合引擎本身不會產生錯誤，所有錯誤都來自資料讀取邊界。
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("資料表尚未建立 ({collection}): {message}")]
    SchemaNotProvisioned { collection: Collection, message: String },

    #[error("讀取 {collection} 失敗: {message}")]
    Unknown { collection: Collection, message: String },

    #[error("讀取快照檔案失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("快照格式錯誤: {0}")]
    Parse(#[from] serde_json::Error),
}

/// PostgREST 回報「找不到資料表」時使用的錯誤碼
pub const MISSING_TABLE_CODE: &str = "PGRST204";

const MISSING_TABLE_MESSAGE: &str = "Could not find the table";

impl DashboardError {
    /// 依據後端回傳的錯誤碼與訊息分類讀取失敗
    pub fn classify(collection: Collection, code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == Some(MISSING_TABLE_CODE) || message.contains(MISSING_TABLE_MESSAGE) {
            DashboardError::SchemaNotProvisioned { collection, message }
        } else {
            DashboardError::Unknown { collection, message }
        }
    }

    /// 取得錯誤分類
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::SchemaNotProvisioned { .. } => ErrorKind::DatabaseNotSetup,
            _ => ErrorKind::UnknownError,
        }
    }

    /// 是否為可修復的「資料表未建立」狀況
    pub fn is_schema_missing(&self) -> bool {
        self.kind() == ErrorKind::DatabaseNotSetup
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
