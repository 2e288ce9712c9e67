//! Communities Entity Module
//!
//! 커뮤니티 글 엔티티와 카테고리를 정의합니다.

pub mod community;

pub use community::{Community, CommunityPatch, CommunityType};
