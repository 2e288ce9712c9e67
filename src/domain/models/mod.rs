//! # Domain Models Module
//!
//! 영속되지 않는 값 객체를 정의합니다.
//!
//! ## Entities vs Models
//!
//! - `../entities/`: MongoDB 문서로 저장되며 식별자를 가짐 (`Member`, `Community`)
//! - `./`: 요청 처리 중에만 존재하는 값 (`AuthenticatedMember`, `TokenClaims`, `Page`)
//!
//! | 모듈 | 내용 |
//! |------|------|
//! | `auth` | 인증된 회원 추출자, 인증 모드, 역할 요구사항 |
//! | `token` | JWT 클레임과 토큰 쌍 |
//! | `page` | 페이지 요청, 정렬, 페이지 결과 |

pub mod auth;
pub mod token;
pub mod page;

pub use auth::*;
pub use token::*;
pub use page::*;
