use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::request::{HttpClient, HttpRequest};
use lostfound_shared::protocol::{
    ApiRequest, CreateClaimRequest, CreateClaimResponse, CreateReportRequest,
    CreateReportResponse, LoginRequest, LoginResponse, MyClaimsRequest, MyReportsRequest,
    RegisterRequest, RegisterResponse,
};
use lostfound_shared::{
    BEARER_PREFIX, CONTENT_TYPE_JSON, Claim, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, Report,
};
use tracing::debug;

/// 失物招领后端的类型化客户端
///
/// 每次调用恰好发出一个请求；不重试、不超时、不去重。
#[derive(Debug, Clone)]
pub struct LostFoundApi<C> {
    config: ClientConfig,
    client: C,
}

impl<C: HttpClient> LostFoundApi<C> {
    pub fn new(config: ClientConfig, client: C) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 发送一个端点请求
    ///
    /// `token` 为空或 `None` 时完全不带 `Authorization` 头。
    pub async fn send<R: ApiRequest>(
        &self,
        request: &R,
        token: Option<&str>,
    ) -> Result<R::Response, ApiError> {
        let url = self.config.endpoint(R::PATH);
        let mut req = HttpRequest::new(&url, R::METHOD);

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            req = req.with_header(HEADER_AUTHORIZATION, &format!("{BEARER_PREFIX}{token}"));
        }
        if R::METHOD.has_body() {
            req = req
                .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
                .with_body(serde_json::to_string(request)?);
        }

        debug!(method = R::METHOD.as_str(), %url, authenticated = req.header(HEADER_AUTHORIZATION).is_some(), "sending request");
        let res = self.client.send(req).await?;
        debug!(status = res.status, path = R::PATH, "response received");

        res.json::<R::Response>()
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.send(request, None).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send(request, None).await
    }

    pub async fn create_report(
        &self,
        request: &CreateReportRequest,
        token: Option<&str>,
    ) -> Result<CreateReportResponse, ApiError> {
        self.send(request, token).await
    }

    pub async fn create_claim(
        &self,
        request: &CreateClaimRequest,
        token: Option<&str>,
    ) -> Result<CreateClaimResponse, ApiError> {
        self.send(request, token).await
    }

    pub async fn my_reports(&self, token: Option<&str>) -> Result<Vec<Report>, ApiError> {
        self.send(&MyReportsRequest, token).await
    }

    pub async fn my_claims(&self, token: Option<&str>) -> Result<Vec<Claim>, ApiError> {
        self.send(&MyClaimsRequest, token).await
    }
}
