use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod date;
pub mod protocol;

use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 物品类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Lost,
    Found,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 2] = [ItemCategory::Lost, ItemCategory::Found];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Lost => "lost",
            ItemCategory::Found => "found",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Lost => "Lost",
            ItemCategory::Found => "Found",
        }
    }
}

/// 报告状态，新报告默认为 `Reported`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Reported,
    Claimed,
    Returned,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Reported,
        ReportStatus::Claimed,
        ReportStatus::Returned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Reported => "reported",
            ReportStatus::Claimed => "claimed",
            ReportStatus::Returned => "returned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Reported => "Reported",
            ReportStatus::Claimed => "Claimed",
            ReportStatus::Returned => "Returned",
        }
    }
}

/// A lost/found item record as returned by `GET /my-reports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub object_id: i64,
    pub object_name: String,
    pub status: String,
    pub date_reported: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// An ownership claim as returned by `GET /my-claims`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claimant_id: i64,
    pub object_id: i64,
    pub claim_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

/// 登录成功时后端返回的用户摘要，仅用于展示
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub student_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// =========================================================
// Token Claims
// =========================================================

/// Bearer token 的载荷（JWT 第二段解码后的 JSON 对象）
///
/// 保留完整对象，只为后端实际签发的字段提供访问器。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn user_id(&self) -> Option<i64> {
        self.0.get("user_id").and_then(Value::as_i64)
    }

    /// `exp`，仅用于展示，不做过期校验
    pub fn expires_at(&self) -> Option<Timestamp> {
        self.0.get("exp").and_then(Value::as_i64).map(Timestamp::from_secs)
    }

    pub fn issued_at(&self) -> Option<Timestamp> {
        self.0.get("iat").and_then(Value::as_i64).map(Timestamp::from_secs)
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
