use lostfound_shared::DEFAULT_API_BASE_URL;

/// 构建期配置：`LOSTFOUND_API_URL=https://... trunk build`
const BUILD_API_URL: Option<&str> = option_env!("LOSTFOUND_API_URL");

/// 客户端配置
///
/// 后端地址按以下优先级决定：运行期覆盖 > 构建期环境变量 > 默认值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// 空地址回退到默认值，末尾的 `/` 会被去掉
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn from_build_env() -> Self {
        Self::new(BUILD_API_URL.unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// 应用运行期覆盖（例如从 LocalStorage 读取的地址），空值忽略
    pub fn with_override(self, base_url: Option<String>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => self,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
