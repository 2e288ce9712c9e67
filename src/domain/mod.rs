//! # Domain Layer Module
//!
//! 회원과 커뮤니티 글 도메인의 데이터 구조를 모아둔 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서로 저장되는 Member, Community
//! ├── models    - 인증 회원, JWT 클레임, 페이지 같은 값 객체
//! ├── dto       - 요청/응답 JSON 구조와 응답 봉투
//! └── mappers   - DTO ↔ 엔티티 변환
//!      │
//!      ▼
//! Service Layer (조회 → 권한 확인 → 병합 → 저장)
//!      │
//!      ▼
//! Repository Layer (MongoDB / Redis / 메모리)
//! ```

pub mod entities;
pub mod models;
pub mod dto;
pub mod mappers;
