//! 회원 데이터 액세스 계층
//!
//! [`MemberRepository`] 트레이트와 MongoDB/메모리 구현을 제공합니다.

pub mod member_repo;
pub mod memory;

pub use member_repo::{MemberRepository, MongoMemberRepository};
pub use memory::InMemoryMemberRepository;
