//! # JWT 토큰 서비스
//!
//! HS256 액세스/리프레시 토큰의 발급, 검증, 재발급, 로그아웃을 담당합니다.
//!
//! - 리프레시 토큰은 회원당 최신 하나만 저장되며 재발급 시 교체됩니다.
//! - 로그아웃된 액세스 토큰은 SHA-256 해시로 남은 유효 시간 동안 보관되어 거부됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use crate::{
    config::JwtSettings,
    core::errors::{AppError, AppResult},
    core::registry::Service,
    domain::models::token::{TokenClaims, TokenPair, TokenType},
    repositories::tokens::TokenRepository,
};

pub struct TokenService {
    token_repo: Arc<dyn TokenRepository>,
    settings: JwtSettings,
}

fn unauthorized(message: &str) -> AppError {
    AppError::AuthenticationError(message.to_string())
}

impl TokenService {
    pub fn new(token_repo: Arc<dyn TokenRepository>, settings: JwtSettings) -> Self {
        Self { token_repo, settings }
    }

    fn encode_token(&self, email: &str, roles: &[String], token_type: TokenType, lifetime: Duration) -> AppResult<String> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: email.to_string(),
            roles: roles.to_vec(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type,
        };

        let encoding_key = EncodingKey::from_secret(self.settings.secret.as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn refresh_ttl_seconds(&self) -> u64 {
        u64::try_from(Duration::days(self.settings.refresh_expiration_days).num_seconds()).unwrap_or(0)
    }

    /// 토큰 쌍을 발급하고 리프레시 토큰을 저장합니다.
    pub async fn generate_token_pair(&self, email: &str, roles: &[String]) -> AppResult<TokenPair> {
        let access_lifetime = Duration::minutes(self.settings.access_expiration_minutes);
        let refresh_lifetime = Duration::days(self.settings.refresh_expiration_days);

        let access_token = self.encode_token(email, roles, TokenType::Access, access_lifetime)?;
        let refresh_token = self.encode_token(email, roles, TokenType::Refresh, refresh_lifetime)?;

        self.token_repo
            .store_refresh_token(email, &refresh_token, self.refresh_ttl_seconds())
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: access_lifetime.num_seconds(),
        })
    }

    /// 서명과 만료만 확인합니다. 로그아웃 여부는 [`verify_access_token`](Self::verify_access_token)에서 확인합니다.
    pub fn decode_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.settings.secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => unauthorized("토큰이 만료되었습니다"),
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    unauthorized("유효하지 않은 토큰입니다")
                }
            })
    }

    pub async fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(unauthorized("액세스 토큰이 아닙니다"));
        }

        if self.token_repo.is_logged_out(&Self::hash_token(token)).await? {
            log::warn!("로그아웃된 토큰 사용 시도: {}", claims.sub);
            return Err(unauthorized("로그아웃된 토큰입니다"));
        }

        Ok(claims)
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| unauthorized("유효하지 않은 인증 헤더 형식입니다"))
    }

    pub fn hash_token(token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }

    /// 액세스 토큰을 남은 유효 시간 동안 로그아웃 목록에 등록합니다.
    pub async fn register_logout_token(&self, access_token: &str) -> AppResult<TokenClaims> {
        let claims = self.verify_access_token(access_token).await?;
        let ttl = claims.remaining_seconds(Utc::now().timestamp());

        self.token_repo
            .register_logout_token(&Self::hash_token(access_token), ttl)
            .await?;

        Ok(claims)
    }

    pub async fn delete_token(&self, email: &str) -> AppResult<()> {
        self.token_repo.delete_refresh_token(email).await
    }

    /// 로그아웃: 액세스 토큰을 무효화하고 저장된 리프레시 토큰을 지웁니다.
    pub async fn logout(&self, access_token: &str) -> AppResult<()> {
        let claims = self.register_logout_token(access_token).await?;
        self.delete_token(&claims.sub).await?;

        log::info!("로그아웃 완료: {}", claims.sub);
        Ok(())
    }

    /// 저장된 리프레시 토큰과 일치할 때만 새 토큰 쌍을 발급합니다.
    pub async fn reissue(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.decode_token(refresh_token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(unauthorized("리프레시 토큰이 아닙니다"));
        }

        let stored = self.token_repo.find_refresh_token(&claims.sub).await?;
        if stored.as_deref() != Some(refresh_token) {
            log::warn!("저장되지 않은 리프레시 토큰으로 재발급 시도: {}", claims.sub);
            return Err(unauthorized("유효하지 않은 리프레시 토큰입니다"));
        }

        let pair = self.generate_token_pair(&claims.sub, &claims.roles).await?;
        log::info!("토큰 재발급: {}", claims.sub);

        Ok(pair)
    }
}

#[async_trait]
impl Service for TokenService {
    fn name(&self) -> &str {
        "token"
    }
}
