//! 失物招领客户端核心
//!
//! 与平台无关的部分，浏览器前端和测试共用：
//! - `session`: 会话存储（token 与由其派生的用户）
//! - `controller` / `forms`: 视图状态机与表单字段
//! - `actions`: 提交与刷新的异步流程
//! - `api` / `request`: 类型化的 REST 接口与可替换的 HTTP 客户端

pub mod actions;
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod request;
pub mod session;
pub mod state;

pub use api::LostFoundApi;
pub use config::ClientConfig;
pub use controller::{FormController, Navigation, Notice, NoticeKind, View};
pub use error::{ApiError, FormError};
pub use forms::FormKind;
pub use request::HttpClient;
pub use session::{Session, derive_user};
pub use state::StateCell;
