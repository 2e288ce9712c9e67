//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙집중식으로 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드한 뒤 이 모듈을 통해 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, bcrypt, Rate Limiting 설정
//! - [`auth_config`] - JWT 토큰 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 저장소 (mongo | memory)
//! export STORAGE_BACKEND="mongo"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="book_village"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export JWT_SECRET="your-super-secret-key"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
