pub mod request;
pub mod response;

pub use request::{LoginRequest, MemberPatchDto, SignupRequest};
pub use response::MemberResponse;
