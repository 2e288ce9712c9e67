//! Members Entity Module
//!
//! 회원 도메인 엔티티를 정의합니다.

pub mod member;

pub use member::{Member, MemberPatch, ROLE_USER};
