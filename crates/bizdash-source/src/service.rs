//! 儀表板服務（載入、計算並發布最新結果）

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use bizdash_calc::AnalyticsCalculator;
use bizdash_core::{Dashboard, Result};

use crate::loader::SnapshotLoader;
use crate::source::DataSource;

/// 載入序號：越新的載入序號越大
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// 已發布的儀表板
#[derive(Debug, Clone)]
struct Published {
    ticket: LoadTicket,
    dashboard: Arc<Dashboard>,
}

/// 儀表板服務
///
/// 多次重新整理可能同時進行；只有序號比目前已發布者更新的結果才會被發布，
/// 較舊的載入即使較晚完成也不會覆蓋較新的結果。
pub struct DashboardService<S: DataSource> {
    source: S,
    calculator: AnalyticsCalculator,
    sequence: AtomicU64,
    published: RwLock<Option<Published>>,
}

impl<S: DataSource> DashboardService<S> {
    /// 創建新的儀表板服務
    pub fn new(source: S, calculator: AnalyticsCalculator) -> Self {
        Self {
            source,
            calculator,
            sequence: AtomicU64::new(0),
            published: RwLock::new(None),
        }
    }

    /// 重新載入並計算儀表板
    ///
    /// 讀取失敗時原樣回傳錯誤，目前已發布的儀表板保持不變。
    pub fn refresh(&self) -> Result<Arc<Dashboard>> {
        let ticket = self.begin();
        tracing::debug!("開始載入儀表板，序號 {}", ticket.value());

        let snapshot = SnapshotLoader::load(&self.source)?;
        let dashboard = Arc::new(self.calculator.calculate(&snapshot));

        if !self.publish(ticket, Arc::clone(&dashboard)) {
            tracing::warn!("序號 {} 的載入已被較新的結果取代，不發布", ticket.value());
        }

        Ok(dashboard)
    }

    /// 取得新的載入序號
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// 發布計算結果；若已有更新的結果則捨棄並回傳 false
    pub fn publish(&self, ticket: LoadTicket, dashboard: Arc<Dashboard>) -> bool {
        let mut published = self.published.write().unwrap_or_else(|e| e.into_inner());
        if published.as_ref().is_some_and(|p| p.ticket > ticket) {
            return false;
        }
        *published = Some(Published { ticket, dashboard });
        true
    }

    /// 目前已發布的儀表板
    pub fn current(&self) -> Option<Arc<Dashboard>> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|p| Arc::clone(&p.dashboard))
    }

    /// 目前已發布結果的序號
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|p| p.ticket)
    }

    /// 獲取計算器引用
    pub fn calculator(&self) -> &AnalyticsCalculator {
        &self.calculator
    }

    /// 獲取資料來源引用
    pub fn source(&self) -> &S {
        &self.source
    }
}
