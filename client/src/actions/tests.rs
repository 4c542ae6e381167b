use super::*;
use crate::config::ClientConfig;
use crate::controller::{NETWORK_FAILURE, Notice, NoticeKind, View};
use crate::forms::FormKind;
use crate::request::mock::{MOCK_BASE_URL, MockHttpClient, MockReply};
use crate::session::tests::encode_token;
use serde_json::{Value, json};
use std::cell::RefCell;

type Api = LostFoundApi<MockHttpClient>;

fn api(client: MockHttpClient) -> Api {
    LostFoundApi::new(ClientConfig::new(MOCK_BASE_URL), client)
}

fn report_json(id: i64, name: &str) -> Value {
    json!({
        "object_id": id,
        "object_name": name,
        "status": "reported",
        "date_reported": "2024-05-01",
        "category": "lost",
    })
}

fn claim_json(id: i64, object_id: i64) -> Value {
    json!({
        "claimant_id": id,
        "object_id": object_id,
        "claim_date": "2024-05-02T10:00:00",
    })
}

fn fill_login(state: &RefCell<FormController>) {
    state.write(|ctl| {
        ctl.edit(FormKind::Login, "student_number", "2021-0001".into())
            .unwrap();
        ctl.edit(FormKind::Login, "password", "hunter2".into())
            .unwrap();
    });
}

/// 已登录且位于仪表盘的状态
fn logged_in(token: &str) -> (RefCell<Session>, RefCell<FormController>) {
    let session = RefCell::new(Session::with_token(token));
    let state = RefCell::new(FormController::new());
    state.write(|ctl| {
        ctl.finish_login(Some(lostfound_shared::protocol::LoginResponse {
            token: Some(token.into()),
            ..Default::default()
        }))
    });
    (session, state)
}

#[tokio::test]
async fn login_success_stores_token_and_loads_dashboard() {
    let api = api(
        MockHttpClient::new()
            .on("/login", MockReply::json(200, json!({ "token": "abc" })))
            .on("/my-reports", MockReply::json(200, json!([report_json(1, "Umbrella")])))
            .on("/my-claims", MockReply::json(200, json!([claim_json(4, 9)]))),
    );
    let session = RefCell::new(Session::new());
    let state = RefCell::new(FormController::new());
    fill_login(&state);

    assert!(submit_login(&api, &session, &state).await);

    assert_eq!(session.borrow().token(), "abc");
    assert!(session.borrow().user().is_none());

    let ctl = state.borrow();
    assert_eq!(ctl.view(), View::Dashboard);
    assert_eq!(ctl.reports()[0].object_name, "Umbrella");
    assert_eq!(ctl.claims()[0].claimant_id, 4);
    assert!(!ctl.reports_loading() && !ctl.claims_loading());

    let sent = api.client();
    let login = &sent.requests_to("/login")[0];
    assert_eq!(login.header("Authorization"), None);
    let body: Value = serde_json::from_str(login.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "student_number": "2021-0001", "password": "hunter2" }));

    for path in ["/my-reports", "/my-claims"] {
        let list = &sent.requests_to(path)[0];
        assert_eq!(list.header("Authorization"), Some("Bearer abc"));
    }
}

#[tokio::test]
async fn login_with_decodable_token_derives_user() {
    let token = encode_token(&json!({ "user_id": 12, "exp": 1_900_000_000 }));
    let api = api(
        MockHttpClient::new()
            .on("/login", MockReply::json(200, json!({ "token": token })))
            .on("/my-reports", MockReply::json(200, json!([])))
            .on("/my-claims", MockReply::json(200, json!([]))),
    );
    let session = RefCell::new(Session::new());
    let state = RefCell::new(FormController::new());

    submit_login(&api, &session, &state).await;

    assert_eq!(session.borrow().user().and_then(|u| u.user_id()), Some(12));
}

#[tokio::test]
async fn rejected_login_shows_server_message_and_sends_nothing_else() {
    let api = api(MockHttpClient::new().on(
        "/login",
        MockReply::json(401, json!({ "error": "bad credentials" })),
    ));
    let session = RefCell::new(Session::new());
    let state = RefCell::new(FormController::new());
    fill_login(&state);

    assert!(!submit_login(&api, &session, &state).await);

    let ctl = state.borrow();
    assert_eq!(ctl.view(), View::Login);
    assert_eq!(ctl.notice(), Some(&Notice::failure("bad credentials")));
    assert_eq!(ctl.login_form().password, "hunter2");
    assert!(!session.borrow().is_authenticated());
    assert_eq!(api.client().requests().len(), 1);
}

#[tokio::test]
async fn transport_failure_leaves_fields_intact() {
    let api = api(MockHttpClient::new().on("/login", MockReply::Fail("connection refused".into())));
    let session = RefCell::new(Session::new());
    let state = RefCell::new(FormController::new());
    fill_login(&state);
    let before = state.borrow().login_form().clone();

    submit_login(&api, &session, &state).await;

    let ctl = state.borrow();
    assert_eq!(ctl.login_form(), &before);
    assert_eq!(ctl.notice(), Some(&Notice::failure(NETWORK_FAILURE)));
    assert_eq!(session.borrow().token(), "");
}

#[tokio::test]
async fn unparseable_body_is_treated_as_failure() {
    let api = api(MockHttpClient::new().on("/register", MockReply::raw(502, "Bad Gateway")));
    let state = RefCell::new(FormController::new());
    state.write(|ctl| ctl.navigate(Navigation::ShowRegister, false));

    submit_register(&api, &state).await;

    let ctl = state.borrow();
    assert_eq!(ctl.view(), View::Register);
    assert_eq!(ctl.notice().map(|n| n.kind), Some(NoticeKind::Failure));
}

#[tokio::test]
async fn register_success_returns_to_login() {
    let api = api(MockHttpClient::new().on(
        "/register",
        MockReply::json(201, json!({ "message": "User registered", "user_id": 5 })),
    ));
    let state = RefCell::new(FormController::new());
    state.write(|ctl| {
        ctl.navigate(Navigation::ShowRegister, false);
        for (name, value) in [
            ("student_number", "2021-0002"),
            ("email", "ana@school.edu"),
            ("contact_info", "0917 555 0101"),
            ("password", "pw"),
        ] {
            ctl.edit(FormKind::Register, name, value.into()).unwrap();
        }
    });

    submit_register(&api, &state).await;

    let ctl = state.borrow();
    assert_eq!(ctl.view(), View::Login);
    assert!(ctl.register_form().email.is_empty());

    let sent = &api.client().requests_to("/register")[0];
    assert_eq!(sent.header("Authorization"), None);
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["email"], "ana@school.edu");
    assert_eq!(body["contact_info"], "0917 555 0101");
}

#[tokio::test]
async fn report_success_resets_form_and_sends_calendar_date() {
    let api = api(MockHttpClient::new().on(
        "/reports",
        MockReply::json(201, json!({ "message": "Report created", "report_id": 31 })),
    ));
    let (session, state) = logged_in("abc");
    state.write(|ctl| {
        ctl.navigate(Navigation::OpenReport, true);
        ctl.edit(FormKind::Report, "object_name", "Water bottle".into())
            .unwrap();
        ctl.edit(FormKind::Report, "category", "lost".into()).unwrap();
        ctl.edit(FormKind::Report, "date_reported", "2024-05-01".into())
            .unwrap();
    });

    assert!(submit_report(&api, &session, &state).await);

    let ctl = state.borrow();
    assert_eq!(ctl.view(), View::Report);
    assert!(ctl.report_form().object_name.is_empty());
    assert_eq!(ctl.report_form().status, "reported");
    assert_eq!(ctl.notice(), Some(&Notice::success("Report submitted (ID: 31).")));

    let sent = &api.client().requests_to("/reports")[0];
    assert_eq!(sent.header("Authorization"), Some("Bearer abc"));
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["date_reported"], "2024-05-01");
    assert_eq!(body["status"], "reported");
    assert_eq!(body["image_url"], Value::Null);
}

#[tokio::test]
async fn invalid_local_input_sends_no_request() {
    let api = api(MockHttpClient::new());
    let (session, state) = logged_in("abc");

    state.write(|ctl| {
        ctl.navigate(Navigation::OpenReport, true);
        ctl.edit(FormKind::Report, "date_reported", "05/01/2024".into())
            .unwrap();
    });
    assert!(!submit_report(&api, &session, &state).await);
    assert_eq!(
        state.borrow().notice(),
        Some(&Notice::failure("Please enter the date as YYYY-MM-DD."))
    );

    state.write(|ctl| {
        ctl.navigate(Navigation::BackToDashboard, true);
        ctl.navigate(Navigation::OpenClaim, true);
        ctl.edit(FormKind::Claim, "object_id", "abc".into()).unwrap();
    });
    assert!(!submit_claim(&api, &session, &state).await);
    assert_eq!(state.borrow().claim_form().object_id, "abc");

    assert!(api.client().requests().is_empty());
}

#[tokio::test]
async fn claim_success_reports_claimant_id() {
    let api = api(MockHttpClient::new().on(
        "/claims",
        MockReply::json(201, json!({ "message": "Claim created", "claimant_id": 8 })),
    ));
    let (session, state) = logged_in("abc");
    state.write(|ctl| {
        ctl.navigate(Navigation::OpenClaim, true);
        ctl.edit(FormKind::Claim, "object_id", "42".into()).unwrap();
    });

    assert!(submit_claim(&api, &session, &state).await);

    assert_eq!(state.borrow().claim_form().object_id, "");
    let sent = &api.client().requests_to("/claims")[0];
    assert_eq!(sent.body.as_deref(), Some(r#"{"object_id":42}"#));
}

#[tokio::test]
async fn dashboard_lists_update_as_each_request_completes() {
    let (reports_tx, reports_reply) = MockReply::deferred();
    let (claims_tx, claims_reply) = MockReply::deferred();
    let api = api(
        MockHttpClient::new()
            .on("/my-reports", reports_reply)
            .on("/my-claims", claims_reply),
    );
    let (session, state) = logged_in("abc");

    let refresh = refresh_dashboard(&api, &session, &state);
    let driver = async {
        tokio::task::yield_now().await;
        assert!(state.borrow().reports_loading() && state.borrow().claims_loading());

        // 认领列表先返回
        claims_tx
            .send(MockReply::json(200, json!([claim_json(1, 2)])))
            .ok();
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        {
            let ctl = state.borrow();
            assert_eq!(ctl.claims().len(), 1);
            assert!(!ctl.claims_loading());
            assert!(ctl.reports().is_empty());
            assert!(ctl.reports_loading());
        }

        reports_tx
            .send(MockReply::json(200, json!([report_json(2, "Wallet")])))
            .ok();
    };

    futures::join!(refresh, driver);

    let ctl = state.borrow();
    assert_eq!(ctl.reports()[0].object_name, "Wallet");
    assert_eq!(ctl.claims()[0].object_id, 2);
    assert!(!ctl.reports_loading() && !ctl.claims_loading());
}

#[tokio::test]
async fn failed_list_load_empties_that_list_silently() {
    let api = api(
        MockHttpClient::new()
            .on("/my-reports", MockReply::json(200, json!([report_json(1, "Old")])))
            .on("/my-claims", MockReply::json(200, json!([claim_json(1, 1)])))
            .on("/my-reports", MockReply::Fail("timeout".into()))
            .on("/my-claims", MockReply::json(200, json!([claim_json(2, 1)]))),
    );
    let (session, state) = logged_in("abc");

    refresh_dashboard(&api, &session, &state).await;
    assert_eq!(state.borrow().reports().len(), 1);

    refresh_dashboard(&api, &session, &state).await;
    let ctl = state.borrow();
    assert!(ctl.reports().is_empty());
    assert_eq!(ctl.claims()[0].claimant_id, 2);
    assert!(ctl.notice().is_none());
}

#[tokio::test]
async fn refresh_without_token_does_nothing() {
    let api = api(MockHttpClient::new());
    let session = RefCell::new(Session::new());
    let state = RefCell::new(FormController::new());

    refresh_dashboard(&api, &session, &state).await;

    assert!(api.client().requests().is_empty());
    assert!(!state.borrow().reports_loading());
}

#[tokio::test]
async fn returning_to_dashboard_refreshes_lists() {
    let api = api(
        MockHttpClient::new()
            .on("/my-reports", MockReply::json(200, json!([report_json(3, "Keys")])))
            .on("/my-claims", MockReply::json(200, json!([]))),
    );
    let (session, state) = logged_in("abc");
    state.write(|ctl| ctl.navigate(Navigation::OpenReport, true));

    assert!(navigate(&api, &session, &state, Navigation::BackToDashboard).await);

    assert_eq!(state.borrow().view(), View::Dashboard);
    assert_eq!(state.borrow().reports()[0].object_id, 3);
}

#[tokio::test]
async fn navigation_to_protected_view_requires_session() {
    let api = api(MockHttpClient::new());
    let (session, state) = logged_in("abc");
    session.write(Session::clear);

    assert!(!navigate(&api, &session, &state, Navigation::OpenClaim).await);
    assert_eq!(state.borrow().view(), View::Dashboard);
}

#[test]
fn logout_clears_session_and_state() {
    let (session, state) = logged_in("abc");

    logout(&session, &state);

    assert_eq!(*session.borrow(), Session::new());
    assert_eq!(state.borrow().view(), View::Login);
    assert!(state.borrow().reports().is_empty());
}

#[tokio::test]
async fn claim_transport_failure_keeps_object_id() {
    let api = api(MockHttpClient::new().on("/claims", MockReply::Fail("connection reset".into())));
    let (session, state) = logged_in("abc");
    state.write(|ctl| {
        ctl.navigate(Navigation::OpenClaim, true);
        ctl.edit(FormKind::Claim, "object_id", "42".into()).unwrap();
    });

    assert!(!submit_claim(&api, &session, &state).await);

    let ctl = state.borrow();
    assert_eq!(ctl.claim_form().object_id, "42");
    assert_eq!(ctl.notice(), Some(&Notice::failure(NETWORK_FAILURE)));
    assert_eq!(ctl.view(), View::Claim);
    assert_eq!(api.client().requests_to("/claims").len(), 1);
}

#[tokio::test]
async fn overlapping_report_submits_each_send_a_request() {
    let (first_tx, first_reply) = MockReply::deferred();
    let (second_tx, second_reply) = MockReply::deferred();
    let api = api(
        MockHttpClient::new()
            .on("/reports", first_reply)
            .on("/reports", second_reply),
    );
    let (session, state) = logged_in("abc");
    state.write(|ctl| {
        ctl.navigate(Navigation::OpenReport, true);
        ctl.edit(FormKind::Report, "object_name", "Lanyard".into())
            .unwrap();
        ctl.edit(FormKind::Report, "date_reported", "2024-05-03".into())
            .unwrap();
    });

    let first = submit_report(&api, &session, &state);
    let second = submit_report(&api, &session, &state);
    let driver = async {
        tokio::task::yield_now().await;
        // 第一个请求尚未返回时第二个已经发出
        assert_eq!(api.client().requests_to("/reports").len(), 2);

        first_tx
            .send(MockReply::json(201, json!({ "report_id": 1 })))
            .ok();
        second_tx
            .send(MockReply::json(201, json!({ "report_id": 2 })))
            .ok();
    };

    let (first_ok, second_ok, ()) = futures::join!(first, second, driver);

    assert!(first_ok && second_ok);
    let sent = api.client().requests_to("/reports");
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].body, sent[1].body);
}

#[tokio::test]
async fn lists_from_a_previous_session_do_not_overwrite_the_next() {
    let (stale_tx, stale_reply) = MockReply::deferred();
    let api = api(
        MockHttpClient::new()
            .on("/my-reports", stale_reply)
            .on("/my-claims", MockReply::json(200, json!([claim_json(1, 1)])))
            .on("/my-reports", MockReply::json(200, json!([report_json(2, "UserB item")])))
            .on("/my-claims", MockReply::json(200, json!([]))),
    );
    let (session, state) = logged_in("tokenA");

    let stale_refresh = refresh_dashboard(&api, &session, &state);
    let driver = async {
        tokio::task::yield_now().await;

        logout(&session, &state);
        session.write(|s| s.set_token("tokenB"));
        state.write(|ctl| {
            ctl.finish_login(Some(lostfound_shared::protocol::LoginResponse {
                token: Some("tokenB".into()),
                ..Default::default()
            }))
        });
        refresh_dashboard(&api, &session, &state).await;

        stale_tx
            .send(MockReply::json(200, json!([report_json(1, "UserA item")])))
            .ok();
    };

    futures::join!(stale_refresh, driver);

    let ctl = state.borrow();
    let names: Vec<_> = ctl.reports().iter().map(|r| r.object_name.as_str()).collect();
    assert_eq!(names, ["UserB item"]);
    assert!(ctl.claims().is_empty());
    assert!(!ctl.reports_loading() && !ctl.claims_loading());

    let sent = api.client().requests_to("/my-reports");
    assert_eq!(sent[0].header("Authorization"), Some("Bearer tokenA"));
    assert_eq!(sent[1].header("Authorization"), Some("Bearer tokenB"));
}
