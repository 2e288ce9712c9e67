use serde::Serialize;
use crate::domain::models::token::TokenPair;

/// 로그인/재발급 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub grant_type: String,
    pub access_token: String,
    pub refresh_token: String,
    /// 액세스 토큰 만료까지 남은 초
    pub expires_in: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        let TokenPair { access_token, refresh_token, expires_in } = pair;

        Self {
            grant_type: "Bearer".to_string(),
            access_token,
            refresh_token,
            expires_in,
        }
    }
}
