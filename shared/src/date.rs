//! 时间类型模块
//!
//! 提供两类工具：
//! - `Timestamp`: 可序列化的毫秒时间戳，用于 token 的 `exp` / `iat`
//! - 日历日期解析与展示，用于报告的 `date_reported`

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 日历日期格式，与浏览器 `<input type="date">` 的值一致
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

// =========================================================
// Timestamp
// =========================================================

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// JWT 的数值日期以秒为单位
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0 / 1000
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M UTC")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

// =========================================================
// 日历日期
// =========================================================

/// 解析 `YYYY-MM-DD`，首尾空白会被忽略
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), CALENDAR_DATE_FORMAT).ok()
}

/// 将后端返回的日期（ISO 日期或日期时间）缩短为日历日期用于展示
///
/// 无法识别的格式原样返回。
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(date) = parse_calendar_date(raw) {
        return date.format(CALENDAR_DATE_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format(CALENDAR_DATE_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format(CALENDAR_DATE_FORMAT).to_string();
    }
    raw.to_string()
}
