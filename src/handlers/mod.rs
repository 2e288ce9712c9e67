//! # HTTP Handlers
//!
//! 요청을 서비스 호출로 연결하고 결과를 응답 봉투로 감쌉니다.
//!
//! - [`members`] - 내 정보 조회/수정
//! - [`auth`] - 가입, 로그인, 토큰 재발급, 로그아웃
//! - [`communities`] - 커뮤니티 글 CRUD와 목록 조회

pub mod members;
pub mod auth;
pub mod communities;
