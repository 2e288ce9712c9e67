//! 토큰 데이터 액세스 계층
//!
//! - 리프레시 토큰: 회원당 하나, TTL과 함께 저장
//! - 로그아웃 토큰: 액세스 토큰의 SHA-256 해시를 원래 만료 시각까지 보관
//!
//! ```rust,ignore
//! token_repo.store_refresh_token("reader@bookvillage.com", &refresh_token, 604_800).await?;
//! token_repo.register_logout_token(&token_hash, 1_800).await?;
//! ```

pub mod token_repository;
pub mod memory;

pub use token_repository::{RedisTokenRepository, TokenRepository};
pub use memory::InMemoryTokenRepository;
