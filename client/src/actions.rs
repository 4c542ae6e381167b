//! 提交与刷新的异步流程
//!
//! 每个流程只在 await 前后短暂地读写状态，不跨越 await 持有借用：
//! 先取出请求与 token，发送，再把结果交回控制器。
//! 网络或解析失败都折叠为 `None`，由控制器决定提示文案。

use crate::api::LostFoundApi;
use crate::controller::{FormController, Navigation};
use crate::request::HttpClient;
use crate::session::Session;
use crate::state::StateCell;
use tracing::{debug, info, warn};

fn bearer(session: &impl StateCell<Session>) -> Option<String> {
    session.read(|s| s.bearer_token().map(str::to_string))
}

pub async fn submit_register<C: HttpClient>(
    api: &LostFoundApi<C>,
    state: &impl StateCell<FormController>,
) {
    let request = state.read(|ctl| ctl.register_form().to_request());

    let outcome = api
        .register(&request)
        .await
        .inspect_err(|e| warn!(error = %e, "register request failed"))
        .ok();

    state.write(|ctl| ctl.finish_register(outcome));
}

/// 登录成功时先写入会话 token，再进入仪表盘并刷新两个列表
pub async fn submit_login<C: HttpClient>(
    api: &LostFoundApi<C>,
    session: &impl StateCell<Session>,
    state: &impl StateCell<FormController>,
) -> bool {
    let request = state.read(|ctl| ctl.login_form().to_request());

    let outcome = api
        .login(&request)
        .await
        .inspect_err(|e| warn!(error = %e, "login request failed"))
        .ok();

    if let Some(token) = outcome.as_ref().and_then(|res| res.token()) {
        session.write(|s| s.set_token(token));
        info!(decoded = session.read(|s| s.user().is_some()), "logged in");
    }

    let entered = state.write(|ctl| ctl.finish_login(outcome));
    if entered {
        refresh_dashboard(api, session, state).await;
    }
    entered
}

pub async fn submit_report<C: HttpClient>(
    api: &LostFoundApi<C>,
    session: &impl StateCell<Session>,
    state: &impl StateCell<FormController>,
) -> bool {
    let request = match state.read(|ctl| ctl.report_form().to_request()) {
        Ok(request) => request,
        Err(e) => {
            state.write(|ctl| ctl.reject(e));
            return false;
        }
    };
    let token = bearer(session);

    let outcome = api
        .create_report(&request, token.as_deref())
        .await
        .inspect_err(|e| warn!(error = %e, "report request failed"))
        .ok();

    state.write(|ctl| ctl.finish_report(outcome))
}

pub async fn submit_claim<C: HttpClient>(
    api: &LostFoundApi<C>,
    session: &impl StateCell<Session>,
    state: &impl StateCell<FormController>,
) -> bool {
    let request = match state.read(|ctl| ctl.claim_form().to_request()) {
        Ok(request) => request,
        Err(e) => {
            state.write(|ctl| ctl.reject(e));
            return false;
        }
    };
    let token = bearer(session);

    let outcome = api
        .create_claim(&request, token.as_deref())
        .await
        .inspect_err(|e| warn!(error = %e, "claim request failed"))
        .ok();

    state.write(|ctl| ctl.finish_claim(outcome))
}

/// 并发拉取报告与认领列表
///
/// 两个请求各自完成时各自替换对应列表，互不等待。
/// 失败时对应列表被清空，不弹出提示。
/// 完成时会话 token 已经变化（登出或换了账户）的结果直接丢弃。
pub async fn refresh_dashboard<C: HttpClient>(
    api: &LostFoundApi<C>,
    session: &impl StateCell<Session>,
    state: &impl StateCell<FormController>,
) {
    let Some(token) = bearer(session) else {
        warn!("dashboard refresh skipped: no token");
        return;
    };
    state.write(FormController::begin_refresh);
    let still_current = || session.read(|s| s.token() == token);

    let reports = async {
        let reports = api
            .my_reports(Some(token.as_str()))
            .await
            .inspect_err(|e| warn!(error = %e, "failed to load reports"))
            .unwrap_or_default();
        if still_current() {
            state.write(|ctl| ctl.replace_reports(reports));
        } else {
            debug!("dropping reports fetched for a previous session");
        }
    };
    let claims = async {
        let claims = api
            .my_claims(Some(token.as_str()))
            .await
            .inspect_err(|e| warn!(error = %e, "failed to load claims"))
            .unwrap_or_default();
        if still_current() {
            state.write(|ctl| ctl.replace_claims(claims));
        } else {
            debug!("dropping claims fetched for a previous session");
        }
    };

    futures::join!(reports, claims);
}

/// 应用导航；回到仪表盘时重新拉取列表
pub async fn navigate<C: HttpClient>(
    api: &LostFoundApi<C>,
    session: &impl StateCell<Session>,
    state: &impl StateCell<FormController>,
    nav: Navigation,
) -> bool {
    let authenticated = session.read(Session::is_authenticated);
    let moved = state.write(|ctl| ctl.navigate(nav, authenticated));

    if moved && nav == Navigation::BackToDashboard {
        refresh_dashboard(api, session, state).await;
    }
    moved
}

pub fn logout(session: &impl StateCell<Session>, state: &impl StateCell<FormController>) {
    session.write(Session::clear);
    state.write(FormController::logout);
    info!("logged out");
}

#[cfg(test)]
mod tests;
