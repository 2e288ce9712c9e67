//! 커뮤니티 글 데이터 액세스 계층

pub mod community_repo;
pub mod memory;

pub use community_repo::{CommunityRepository, MongoCommunityRepository};
pub use memory::InMemoryCommunityRepository;
