//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! ├── models/       ← 인증 주체, 토큰, 페이지 등 값 객체
//! ├── dto/          ← 요청/응답 데이터 전송 객체
//! └── mappers/      ← DTO ↔ 엔티티 변환
//! ```
//!
//! | 엔티티 | 컬렉션 | `_id` |
//! |--------|--------|-------|
//! | [`members::Member`] | `members` | 이메일 (로그인 이름) |
//! | [`communities::Community`] | `communities` | 순번 (`counters` 컬렉션) |

pub mod members;
pub mod communities;
