use thiserror::Error;

/// 传输层错误：请求未能完成，或响应体不是预期的 JSON
///
/// 应用层失败（JSON 中缺少成功标记）不属于此类，由控制器解释。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request could not be built: {0}")]
    Build(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("response is not valid JSON (status {status}): {message}")]
    Parse { status: u16, message: String },
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Build(e.to_string())
    }
}

/// 表单到请求的转换错误，在发送前就地提示
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("Please enter the date as YYYY-MM-DD.")]
    InvalidDate,

    #[error("Object ID must be a number.")]
    InvalidObjectId,
}
