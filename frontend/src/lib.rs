//! 失物招领前端应用
//!
//! Context-Driven 的薄 UI 层，状态与流程都在 `lostfound_client` 中：
//! - `web`: 浏览器适配（fetch 客户端、LocalStorage 配置、响应式状态单元）
//! - `components`: 每个视图一个组件，外加通用字段与提示
//! - `logging`: `tracing` 到浏览器控制台

mod components {
    pub mod claim_form;
    pub mod dashboard;
    pub mod fields;
    pub mod login;
    pub mod notice;
    pub mod register;
    pub mod report_form;
}
pub mod logging;

// 浏览器 API 适配模块
pub(crate) mod web {
    mod http;
    pub mod reactive;
    mod storage;

    pub use http::FetchHttpClient;
    pub use reactive::Reactive;
    pub use storage::load_config;
}

use crate::components::claim_form::ClaimPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::notice::NoticeToast;
use crate::components::register::RegisterPage;
use crate::components::report_form::ReportPage;
use crate::web::{FetchHttpClient, Reactive};

use leptos::prelude::*;
use leptos::task::spawn_local;
use lostfound_client::{
    ClientConfig, FormController, LostFoundApi, Navigation, Session, View, actions,
};

/// 应用上下文
///
/// 会话与控制器是两个独立的句柄，显式地作为属性传给每个组件。
#[derive(Clone, Copy)]
pub(crate) struct AppContext {
    api: StoredValue<LostFoundApi<FetchHttpClient>>,
    pub(crate) session: Reactive<Session>,
    pub(crate) state: Reactive<FormController>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            api: StoredValue::new(LostFoundApi::new(config, FetchHttpClient)),
            session: Reactive::new(Session::new()),
            state: Reactive::new(FormController::new()),
        }
    }

    pub fn api(&self) -> LostFoundApi<FetchHttpClient> {
        self.api.get_value()
    }

    /// 在后台执行一次导航
    pub fn go(self, nav: Navigation) {
        let api = self.api();
        spawn_local(async move {
            actions::navigate(&api, &self.session, &self.state, nav).await;
        });
    }

    pub fn refresh(self) {
        let api = self.api();
        spawn_local(async move {
            actions::refresh_dashboard(&api, &self.session, &self.state).await;
        });
    }

    pub fn logout(self) {
        actions::logout(&self.session, &self.state);
    }
}

/// 视图匹配函数
fn view_matcher(ctx: AppContext, current: View) -> AnyView {
    match current {
        View::Login => view! { <LoginPage ctx=ctx /> }.into_any(),
        View::Register => view! { <RegisterPage ctx=ctx /> }.into_any(),
        View::Dashboard => view! { <DashboardPage ctx=ctx /> }.into_any(),
        View::Report => view! { <ReportPage ctx=ctx /> }.into_any(),
        View::Claim => view! { <ClaimPage ctx=ctx /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(web::load_config());

    // 只在视图切换时重新渲染，字段编辑不会重建页面
    let current = Memo::new(move |_| ctx.state.with(FormController::view));

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <NoticeToast ctx=ctx />
            {move || view_matcher(ctx, current.get())}
        </div>
    }
}
