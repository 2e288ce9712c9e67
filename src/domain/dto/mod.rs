//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 JSON 구조를 정의합니다.
//! 모든 필드는 camelCase로 직렬화되며 요청 DTO는 `validator`로 검증합니다.
//!
//! ```text
//! dto/
//! ├── response.rs     # 응답 봉투 (data / data + pageInfo / message)
//! ├── page_query.rs   # 목록 조회 쿼리 (page, size, sort)
//! ├── members/        # 회원 가입, 로그인, 프로필 수정/조회
//! ├── communities/    # 커뮤니티 글 작성, 수정, 조회
//! └── tokens/         # 토큰 재발급 요청과 토큰 응답
//! ```
//!
//! ## 응답 봉투
//!
//! ```json
//! { "data": { "communityId": 1, "type": "free", "title": "..." } }
//! { "data": [ ... ], "pageInfo": { "currentPage": 0, "totalPage": 3, ... } }
//! { "message": "logout completed!" }
//! ```

pub mod response;
pub mod page_query;
pub mod members;
pub mod communities;
pub mod tokens;

pub use response::{MessageResponse, MultiResponse, PageInfo, SingleResponse};
pub use page_query::PageQuery;
