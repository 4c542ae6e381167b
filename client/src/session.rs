//! 会话存储
//!
//! 持有不透明的 bearer token 与由其派生的用户（token 载荷）。
//! `user` 是 `token` 的纯函数：每次赋值 token 时同步重新计算，
//! 赋值完成后不会观察到过期的 `user`。

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use lostfound_shared::Claims;
use tracing::debug;

/// 解码 token 的载荷段
///
/// 只解码，不校验签名和过期时间（由后端负责）。任何失败都返回 `None`。
pub fn derive_user(token: &str) -> Option<Claims> {
    if token.is_empty() {
        return None;
    }

    let payload = token.split('.').nth(1)?;
    // 同时接受 base64url 与标准字母表，有无填充均可
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = match URL_SAFE_NO_PAD.decode(normalized) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "token payload is not base64");
            return None;
        }
    };

    match serde_json::from_slice::<Claims>(&bytes) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!(error = %e, "token payload is not a JSON object");
            None
        }
    }
}

/// 会话状态
///
/// 不变量：`user.is_some()` 当且仅当 token 非空且可解码。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: String,
    user: Option<Claims>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set_token(token);
        session
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> Option<&Claims> {
        self.user.as_ref()
    }

    /// 设置 token 并同步派生 `user`
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
        self.user = derive_user(&self.token);
    }

    pub fn clear(&mut self) {
        self.set_token(String::new());
    }

    /// 非空 token，用于 `Authorization` 头
    pub fn bearer_token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE};
    use serde_json::{Value, json};

    /// 构造一个三段式 token，签名段是假的
    pub(crate) fn encode_token(payload: &Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn valid_token_yields_its_payload() {
        let payload = json!({ "user_id": 7, "exp": 1_700_000_000, "iat": 1_699_998_200 });
        let mut session = Session::new();
        session.set_token(encode_token(&payload));

        let user = session.user().expect("decoded claims");
        assert_eq!(Value::Object(user.as_map().clone()), payload);
        assert_eq!(user.user_id(), Some(7));
    }

    #[test]
    fn invalid_tokens_leave_user_absent() {
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        let not_object = format!("a.{}.c", URL_SAFE_NO_PAD.encode("[1,2]"));

        for token in ["abc", "a.b.c", "a.!!!.c", not_json.as_str(), not_object.as_str()] {
            let session = Session::with_token(token);
            assert_eq!(session.token(), token);
            assert!(session.user().is_none(), "token {token:?} should not decode");
            assert!(session.is_authenticated());
        }
    }

    #[test]
    fn padded_and_standard_alphabet_payloads_decode() {
        let payload = json!({ "user_id": 1, "note": "??>>" });
        let raw = payload.to_string();

        let padded = format!("h.{}.s", URL_SAFE.encode(&raw));
        let standard = format!("h.{}.s", STANDARD.encode(&raw));

        assert_eq!(derive_user(&padded).and_then(|c| c.user_id()), Some(1));
        assert_eq!(derive_user(&standard).and_then(|c| c.user_id()), Some(1));
    }

    #[test]
    fn user_is_recomputed_on_every_token_change() {
        let mut session = Session::with_token(encode_token(&json!({ "user_id": 1 })));
        assert_eq!(session.user().and_then(Claims::user_id), Some(1));

        session.set_token(encode_token(&json!({ "user_id": 2 })));
        assert_eq!(session.user().and_then(Claims::user_id), Some(2));

        session.set_token("garbage");
        assert!(session.user().is_none());
    }

    #[test]
    fn clearing_the_token_clears_user() {
        let mut session = Session::with_token(encode_token(&json!({ "user_id": 3 })));
        session.clear();

        assert_eq!(session.token(), "");
        assert!(session.user().is_none());
        assert_eq!(session.bearer_token(), None);
        assert!(!session.is_authenticated());
        assert_eq!(session, Session::new());
    }
}
