//! 북빌리지 서버
//!
//! 회원과 커뮤니티 글을 다루는 REST 백엔드입니다.
//! JWT 베어러 토큰으로 회원을 인증하고, 작성자만 자신의 글을 수정/삭제할 수 있습니다.
//!
//! # Features
//!
//! - **회원**: 가입, 로그인, 내 정보 조회와 부분 수정
//! - **커뮤니티**: 글 작성/조회/부분 수정/삭제, 페이지 목록, 내 글 목록
//! - **인증**: HS256 액세스/리프레시 토큰, 재발급, 로그아웃 토큰 차단
//! - **저장소**: MongoDB + Redis, 또는 로컬 개발/테스트용 인메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Routes      │ ← 엔드포인트, 인증 미들웨어, 추출기 설정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 조회 → 권한 확인 → 병합 → 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← trait 객체 (MongoDB/Redis, 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//! use book_village_server::config::JwtSettings;
//! use book_village_server::core::AppContext;
//! use book_village_server::routes::configure_all_routes;
//!
//! let context = AppContext::in_memory(JwtSettings::from_env(), 4);
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &context));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
