use crate::domain::dto::communities::{CommunityPatchDto, CommunityPostDto, CommunityResponse};
use crate::domain::entities::communities::{Community, CommunityPatch};
use crate::domain::entities::members::Member;
use super::to_utc;

/// 작성 요청을 저장 전 글로 변환합니다. 닉네임과 작성자는 작성 회원에게서 가져옵니다.
pub fn post_dto_to_draft(dto: CommunityPostDto, author: &Member) -> Community {
    let CommunityPostDto { community_type, title, content, .. } = dto;

    Community::draft(
        community_type,
        title,
        content,
        author.display_name.clone(),
        author.email.clone(),
    )
}

impl From<CommunityPatchDto> for CommunityPatch {
    fn from(dto: CommunityPatchDto) -> Self {
        let CommunityPatchDto { community_type, title, content, display_name, .. } = dto;

        Self { community_type, title, content, display_name }
    }
}

impl From<Community> for CommunityResponse {
    fn from(community: Community) -> Self {
        let Community {
            community_id,
            community_type,
            title,
            content,
            display_name,
            created_at,
            modified_at,
            ..
        } = community;

        Self {
            community_id,
            community_type,
            title,
            content,
            display_name,
            created_at: to_utc(created_at),
            modified_at: to_utc(modified_at),
        }
    }
}
