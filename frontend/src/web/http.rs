//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现 `HttpClient`，供 `LostFoundApi` 在浏览器中使用。

use gloo_net::http::{Request, RequestBuilder};
use lostfound_client::request::{HttpRequest, HttpResponse};
use lostfound_client::{ApiError, HttpClient};
use lostfound_shared::protocol::HttpMethod;

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn builder(req: &HttpRequest) -> RequestBuilder {
        let builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };
        req.headers
            .iter()
            .fold(builder, |builder, (key, value)| builder.header(key, value))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let builder = Self::builder(&req);
        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Build(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
