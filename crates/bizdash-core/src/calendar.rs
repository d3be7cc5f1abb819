//! 日曆日界線

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

/// 一天的毫秒數
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// 日曆日界線（決定一個時間點落在哪一天）
///
/// 營收曲線依「當地日曆日」分桶，必須與呈現層顯示日期所用的時區一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
    /// 部署環境的本地時區
    #[default]
    Local,
    /// 固定時差
    Fixed(FixedOffset),
}

impl DayBoundary {
    /// UTC 日界線
    pub fn utc() -> Self {
        DayBoundary::Fixed(Utc.fix())
    }

    /// 以分鐘數指定時差（東正西負），超出 ±24 小時回傳 None
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(DayBoundary::Fixed)
    }

    /// 取得時間點所屬的日曆日
    pub fn calendar_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            DayBoundary::Local => instant.with_timezone(&Local).date_naive(),
            DayBoundary::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }
}

/// 計算兩個時間點之間涵蓋的天數（無條件進位，至少 1 天）
pub fn days_covered(oldest: DateTime<Utc>, newest: DateTime<Utc>) -> u32 {
    let millis = (newest - oldest).num_milliseconds();
    if millis <= 0 {
        return 1;
    }

    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}
