pub mod request;
pub mod response;

pub use request::{CommunityPatchDto, CommunityPostDto};
pub use response::CommunityResponse;
