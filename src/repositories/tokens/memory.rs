//! 메모리 토큰 저장소
//!
//! 만료 시각을 함께 저장하고 조회 시점에 만료 여부를 판단합니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use chrono::Utc;
use crate::core::errors::AppResult;
use crate::core::registry::Repository;
use crate::repositories::lock_poisoned;
use super::token_repository::TokenRepository;

#[derive(Default)]
pub struct InMemoryTokenRepository {
    /// email → (refresh token, 만료 시각)
    refresh_tokens: RwLock<HashMap<String, (String, i64)>>,
    /// token hash → 만료 시각
    logout_tokens: RwLock<HashMap<String, i64>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn expires_at(ttl_seconds: u64) -> i64 {
    Utc::now().timestamp().saturating_add_unsigned(ttl_seconds.max(1))
}

#[async_trait]
impl Repository for InMemoryTokenRepository {
    fn name(&self) -> &str {
        "token"
    }

    fn collection_name(&self) -> &str {
        "tokens"
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn store_refresh_token(&self, email: &str, refresh_token: &str, ttl_seconds: u64) -> AppResult<()> {
        let mut tokens = self.refresh_tokens.write().map_err(lock_poisoned)?;
        tokens.insert(email.to_string(), (refresh_token.to_string(), expires_at(ttl_seconds)));
        Ok(())
    }

    async fn find_refresh_token(&self, email: &str) -> AppResult<Option<String>> {
        let tokens = self.refresh_tokens.read().map_err(lock_poisoned)?;
        let now = Utc::now().timestamp();

        Ok(tokens
            .get(email)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(token, _)| token.clone()))
    }

    async fn delete_refresh_token(&self, email: &str) -> AppResult<()> {
        let mut tokens = self.refresh_tokens.write().map_err(lock_poisoned)?;
        tokens.remove(email);
        Ok(())
    }

    async fn register_logout_token(&self, token_hash: &str, ttl_seconds: u64) -> AppResult<()> {
        let mut tokens = self.logout_tokens.write().map_err(lock_poisoned)?;
        let now = Utc::now().timestamp();

        tokens.retain(|_, expires_at| *expires_at > now);
        tokens.insert(token_hash.to_string(), expires_at(ttl_seconds));
        Ok(())
    }

    async fn is_logged_out(&self, token_hash: &str) -> AppResult<bool> {
        let tokens = self.logout_tokens.read().map_err(lock_poisoned)?;
        let now = Utc::now().timestamp();

        Ok(tokens.get(token_hash).is_some_and(|expires_at| *expires_at > now))
    }
}
