//! # Middlewares
//!
//! - [`AuthMiddleware`]: JWT 베어러 토큰 인증 (필수/선택, 역할 요구)

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
