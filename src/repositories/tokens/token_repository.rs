use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::caching::redis::RedisClient;
use crate::core::errors::AppResult;
use crate::core::registry::Repository;

/// 토큰 저장소 추상화
///
/// 리프레시 토큰은 회원당 하나만 유지되며, 로그아웃된 액세스 토큰은
/// 원래 만료 시각까지 해시로만 보관됩니다.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn store_refresh_token(&self, email: &str, refresh_token: &str, ttl_seconds: u64) -> AppResult<()>;

    /// 아직 만료되지 않은 리프레시 토큰
    async fn find_refresh_token(&self, email: &str) -> AppResult<Option<String>>;

    async fn delete_refresh_token(&self, email: &str) -> AppResult<()>;

    async fn register_logout_token(&self, token_hash: &str, ttl_seconds: u64) -> AppResult<()>;

    async fn is_logged_out(&self, token_hash: &str) -> AppResult<bool>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenInfo {
    pub email: String,
    pub refresh_token: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedOutTokenInfo {
    pub logged_out_at: i64,
}

pub struct RedisTokenRepository {
    redis: Arc<RedisClient>,
}

impl RedisTokenRepository {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    fn refresh_key(email: &str) -> String {
        format!("refresh_token:{}", email)
    }

    fn logout_key(token_hash: &str) -> String {
        format!("logout_token:{}", token_hash)
    }
}

#[async_trait]
impl Repository for RedisTokenRepository {
    fn name(&self) -> &str {
        "token"
    }

    fn collection_name(&self) -> &str {
        "tokens"
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn store_refresh_token(&self, email: &str, refresh_token: &str, ttl_seconds: u64) -> AppResult<()> {
        let now = Utc::now().timestamp();
        let info = RefreshTokenInfo {
            email: email.to_string(),
            refresh_token: refresh_token.to_string(),
            issued_at: now,
            expires_at: now.saturating_add_unsigned(ttl_seconds),
        };

        self.redis
            .set_with_expiry(&Self::refresh_key(email), &info, ttl_seconds)
            .await?;

        log::debug!("리프레시 토큰 저장 - {}, ttl: {}초", email, ttl_seconds);
        Ok(())
    }

    async fn find_refresh_token(&self, email: &str) -> AppResult<Option<String>> {
        let info = self.redis
            .get::<RefreshTokenInfo>(&Self::refresh_key(email))
            .await?;

        Ok(info
            .filter(|info| info.expires_at > Utc::now().timestamp())
            .map(|info| info.refresh_token))
    }

    async fn delete_refresh_token(&self, email: &str) -> AppResult<()> {
        self.redis.del(&Self::refresh_key(email)).await?;
        Ok(())
    }

    async fn register_logout_token(&self, token_hash: &str, ttl_seconds: u64) -> AppResult<()> {
        let info = LoggedOutTokenInfo { logged_out_at: Utc::now().timestamp() };

        self.redis
            .set_with_expiry(&Self::logout_key(token_hash), &info, ttl_seconds)
            .await?;

        Ok(())
    }

    async fn is_logged_out(&self, token_hash: &str) -> AppResult<bool> {
        Ok(self.redis.exists(&Self::logout_key(token_hash)).await?)
    }
}
