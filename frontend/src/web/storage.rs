//! LocalStorage 封装模块
//!
//! 只用于读取后端地址的运行期覆盖，值按原样存放（不是 JSON）。

use gloo_storage::{LocalStorage, Storage};
use lostfound_client::ClientConfig;
use tracing::info;

/// 覆盖后端地址的 LocalStorage 键
pub const API_URL_KEY: &str = "lostfound_api_url";

fn raw_get(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

/// 构建期配置叠加 LocalStorage 中的覆盖值
pub fn load_config() -> ClientConfig {
    let config = ClientConfig::from_build_env().with_override(raw_get(API_URL_KEY));
    info!(base_url = config.base_url(), "api endpoint configured");
    config
}
