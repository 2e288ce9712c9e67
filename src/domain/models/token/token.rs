//! JWT 클레임과 액세스/리프레시 토큰 쌍
use serde::{Deserialize, Serialize};

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT 클레임
///
/// - `sub`: 회원 이메일
/// - `roles`: 회원 역할 목록
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp, 초)
/// - `jti`: 토큰 고유 ID. 같은 초에 발급된 토큰도 서로 다르게 만듭니다.
/// - `token_type`: 액세스 토큰과 리프레시 토큰 구분
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
    pub token_type: TokenType,
}

impl TokenClaims {
    /// 만료까지 남은 초. 이미 만료되었으면 0
    pub fn remaining_seconds(&self, now: i64) -> u64 {
        u64::try_from(self.exp - now).unwrap_or(0)
    }
}

/// 로그인/재발급 결과로 전달되는 토큰 쌍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// 액세스 토큰 만료까지 남은 초
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_seconds() {
        let claims = TokenClaims {
            sub: "reader@bookvillage.com".to_string(),
            roles: vec!["USER".to_string()],
            iat: 1_000,
            exp: 1_600,
            jti: "jti".to_string(),
            token_type: TokenType::Access,
        };

        assert_eq!(claims.remaining_seconds(1_000), 600);
        assert_eq!(claims.remaining_seconds(2_000), 0);
    }

    #[test]
    fn test_token_type_wire_name() {
        assert_eq!(serde_json::to_string(&TokenType::Refresh).unwrap(), "\"refresh\"");
    }
}
