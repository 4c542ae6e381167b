use crate::{Account, Claim, Report};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Register
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub student_number: String,
    pub email: String,
    pub contact_info: String,
    pub password: String,
}

/// The backend answers either `{ success, error? }` or `{ message, user_id }` (201).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RegisterResponse {
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false) || self.user_id.is_some()
    }
}

impl ApiRequest for RegisterRequest {
    type Response = RegisterResponse;
    const PATH: &'static str = "/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Login
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub student_number: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResponse {
    /// The issued token, if the response carries a non-empty one.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Reports
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReportRequest {
    pub object_name: String,
    pub category: String,
    pub description: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date_reported: NaiveDate,
    pub last_location: String,
    pub status: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateReportResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateReportResponse {
    /// Identifier of the created report; `report_id` wins over `object_id`.
    pub fn id(&self) -> Option<i64> {
        self.report_id.or(self.object_id)
    }
}

impl ApiRequest for CreateReportRequest {
    type Response = CreateReportResponse;
    const PATH: &'static str = "/reports";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List the caller's own reports
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MyReportsRequest;

impl ApiRequest for MyReportsRequest {
    type Response = Vec<Report>;
    const PATH: &'static str = "/my-reports";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// =========================================================
// Claims
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClaimRequest {
    pub object_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateClaimResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimant_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiRequest for CreateClaimRequest {
    type Response = CreateClaimResponse;
    const PATH: &'static str = "/claims";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List the caller's own claims
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MyClaimsRequest;

impl ApiRequest for MyClaimsRequest {
    type Response = Vec<Claim>;
    const PATH: &'static str = "/my-claims";
    const METHOD: HttpMethod = HttpMethod::Get;
}
