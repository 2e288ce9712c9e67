pub mod request;
pub mod response;

pub use request::ReissueRequest;
pub use response::TokenResponse;
