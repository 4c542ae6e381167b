//! 视图状态机
//!
//! 单一的标签联合 `View` 加上各表单的字段状态与仪表盘列表。
//! 这里的所有方法都是同步且纯内存的；网络请求由 `actions` 发出，
//! 结果（或传输失败时的 `None`）再交回 `finish_*` 方法。

use crate::error::FormError;
use crate::forms::{ClaimForm, FieldSet, FormKind, LoginForm, RegisterForm, ReportForm};
use lostfound_shared::protocol::{
    CreateClaimResponse, CreateReportResponse, LoginResponse, RegisterResponse,
};
use lostfound_shared::{Account, Claim, Report};
use tracing::warn;

pub const NETWORK_FAILURE: &str = "Could not reach the server. Please try again.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const REGISTERED: &str = "Registration successful. Please log in.";
pub const LOGIN_FAILED: &str = "Login failed. Check your student number and password.";
pub const REPORT_FAILED: &str = "Failed to submit report.";
pub const CLAIM_FAILED: &str = "Failed to submit claim.";
pub const LOGGED_OUT: &str = "You have been logged out.";

/// 应用视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// 登录页面 (初始视图)
    #[default]
    Login,
    Register,
    Report,
    Claim,
    Dashboard,
}

impl View {
    /// 该视图是否需要持有 token
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Report | Self::Claim)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Create an account",
            Self::Report => "Submit a report",
            Self::Claim => "Submit a claim",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// 用户发起的导航
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    ShowRegister,
    ShowLogin,
    OpenReport,
    OpenClaim,
    BackToDashboard,
}

impl Navigation {
    /// 从 `from` 出发的目标视图；不允许的组合返回 `None`
    pub fn target(self, from: View) -> Option<View> {
        match (self, from) {
            (Self::ShowRegister, View::Login) => Some(View::Register),
            (Self::ShowLogin, View::Register) => Some(View::Login),
            (Self::OpenReport, View::Dashboard) => Some(View::Report),
            (Self::OpenClaim, View::Dashboard) => Some(View::Claim),
            (Self::BackToDashboard, View::Report | View::Claim) => Some(View::Dashboard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// 面向用户的一条提示，新的提示会替换旧的
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Failure
    }
}

/// 服务端消息优先，否则使用通用文案
fn failure_message(server: Option<String>, fallback: &str) -> String {
    server
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    view: View,
    register: RegisterForm,
    login: LoginForm,
    report: ReportForm,
    claim: ClaimForm,
    reports: Vec<Report>,
    claims: Vec<Claim>,
    reports_loading: bool,
    claims_loading: bool,
    account: Option<Account>,
    notice: Option<Notice>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    pub fn view(&self) -> View {
        self.view
    }

    pub fn register_form(&self) -> &RegisterForm {
        &self.register
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    pub fn report_form(&self) -> &ReportForm {
        &self.report
    }

    pub fn claim_form(&self) -> &ClaimForm {
        &self.claim
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn reports_loading(&self) -> bool {
        self.reports_loading
    }

    pub fn claims_loading(&self) -> bool {
        self.claims_loading
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // --- Field editing ---

    pub fn field(&self, form: FormKind, name: &str) -> Option<&str> {
        match form {
            FormKind::Register => self.register.field(name),
            FormKind::Login => self.login.field(name),
            FormKind::Report => self.report.field(name),
            FormKind::Claim => self.claim.field(name),
        }
    }

    /// 只覆盖 `form` 中名为 `name` 的字段
    pub fn edit(&mut self, form: FormKind, name: &str, value: String) -> Result<(), FormError> {
        match form {
            FormKind::Register => self.register.set_field(name, value),
            FormKind::Login => self.login.set_field(name, value),
            FormKind::Report => self.report.set_field(name, value),
            FormKind::Claim => self.claim.set_field(name, value),
        }
    }

    // --- Navigation ---

    /// 应用一次导航，返回是否发生了切换
    ///
    /// 目标视图需要认证而 `authenticated` 为假时拒绝。
    pub fn navigate(&mut self, nav: Navigation, authenticated: bool) -> bool {
        let Some(target) = nav.target(self.view) else {
            warn!(?nav, from = ?self.view, "navigation not allowed from this view");
            return false;
        };
        if target.requires_auth() && !authenticated {
            warn!(?target, "navigation refused: not authenticated");
            return false;
        }
        self.view = target;
        true
    }

    // --- Submission results ---

    pub fn finish_register(&mut self, outcome: Option<RegisterResponse>) {
        match outcome {
            None => self.notice = Some(Notice::failure(NETWORK_FAILURE)),
            Some(res) if res.is_success() => {
                self.register = RegisterForm::default();
                self.view = View::Login;
                self.notice = Some(Notice::success(REGISTERED));
            }
            Some(res) => {
                self.notice = Some(Notice::failure(failure_message(res.error, REGISTER_FAILED)));
            }
        }
    }

    /// 返回是否进入了仪表盘。token 由调用方写入会话。
    pub fn finish_login(&mut self, outcome: Option<LoginResponse>) -> bool {
        match outcome {
            None => {
                self.notice = Some(Notice::failure(NETWORK_FAILURE));
                false
            }
            Some(res) if res.token().is_some() => {
                self.account = res.user;
                self.login = LoginForm::default();
                self.notice = None;
                self.view = View::Dashboard;
                true
            }
            Some(res) => {
                self.notice = Some(Notice::failure(failure_message(res.error, LOGIN_FAILED)));
                false
            }
        }
    }

    /// 成功时重置报告表单并停留在报告视图
    pub fn finish_report(&mut self, outcome: Option<CreateReportResponse>) -> bool {
        match outcome {
            None => {
                self.notice = Some(Notice::failure(NETWORK_FAILURE));
                false
            }
            Some(res) => match res.id() {
                Some(id) => {
                    self.report.reset();
                    self.notice = Some(Notice::success(format!("Report submitted (ID: {id}).")));
                    true
                }
                None => {
                    self.notice = Some(Notice::failure(failure_message(res.error, REPORT_FAILED)));
                    false
                }
            },
        }
    }

    pub fn finish_claim(&mut self, outcome: Option<CreateClaimResponse>) -> bool {
        match outcome {
            None => {
                self.notice = Some(Notice::failure(NETWORK_FAILURE));
                false
            }
            Some(CreateClaimResponse {
                claimant_id: Some(id),
                ..
            }) => {
                self.claim.reset();
                self.notice = Some(Notice::success(format!("Claim submitted (ID: {id}).")));
                true
            }
            Some(res) => {
                self.notice = Some(Notice::failure(failure_message(res.error, CLAIM_FAILED)));
                false
            }
        }
    }

    /// 本地转换失败，不发送请求
    pub fn reject(&mut self, err: FormError) {
        self.notice = Some(Notice::failure(err.to_string()));
    }

    // --- Dashboard lists ---

    pub fn begin_refresh(&mut self) {
        self.reports_loading = true;
        self.claims_loading = true;
    }

    /// 整体替换报告列表；已登出时丢弃迟到的结果
    pub fn replace_reports(&mut self, reports: Vec<Report>) {
        if !self.view.requires_auth() {
            return;
        }
        self.reports = reports;
        self.reports_loading = false;
    }

    pub fn replace_claims(&mut self, claims: Vec<Claim>) {
        if !self.view.requires_auth() {
            return;
        }
        self.claims = claims;
        self.claims_loading = false;
    }

    // --- Misc ---

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// 清空所有表单与列表并回到登录页；会话由调用方清除
    pub fn logout(&mut self) {
        *self = Self::default();
        self.notice = Some(Notice::success(LOGGED_OUT));
    }
}
