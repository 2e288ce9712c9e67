//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 각 서비스는 생성자로 리포지토리를 전달받으며
//! [`AppContext`](crate::core::AppContext)가 조립합니다.
//!
//! | 서비스 | 책임 |
//! |--------|------|
//! | `MemberService` | 가입, 프로필 조회/수정, 비밀번호 검증 |
//! | `CommunityService` | 글 작성/조회/수정/삭제, 작성자 권한 확인 |
//! | `TokenService` | JWT 발급/검증/재발급, 로그아웃 |

pub mod members;
pub mod communities;
pub mod auth;

pub use members::MemberService;
pub use communities::CommunityService;
pub use auth::TokenService;
