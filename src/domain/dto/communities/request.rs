//! 커뮤니티 글 요청 DTO
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::communities::CommunityType;

/// 글 작성 요청
///
/// `displayName`은 받더라도 무시되고 작성 회원의 닉네임이 사용됩니다.
///
/// ```json
/// { "type": "free", "title": "title1", "content": "content1" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPostDto {
    #[serde(rename = "type")]
    pub community_type: CommunityType,

    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, message = "본문을 입력해주세요"))]
    pub content: String,

    pub display_name: Option<String>,
}

/// 글 부분 수정 요청
///
/// `communityId`는 경로 파라미터가 우선하므로 무시됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPatchDto {
    pub community_id: Option<i64>,

    #[serde(rename = "type")]
    pub community_type: Option<CommunityType>,

    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "본문을 입력해주세요"))]
    pub content: Option<String>,

    #[validate(length(min = 1, max = 50, message = "닉네임은 1-50자 사이여야 합니다"))]
    pub display_name: Option<String>,
}
