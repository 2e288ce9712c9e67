//! # 커뮤니티 글 서비스
//!
//! 모든 변경 작업은 같은 순서를 따릅니다.
//!
//! 1. 글 조회 (없으면 404)
//! 2. 작성자 확인 (다르면 403)
//! 3. 부분 수정 병합
//! 4. 저장 (한 번)

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Service,
    domain::dto::communities::{CommunityPatchDto, CommunityPostDto, CommunityResponse},
    domain::entities::communities::{Community, CommunityPatch},
    domain::mappers::community_mapper::post_dto_to_draft,
    domain::models::page::{Page, PageRequest},
    repositories::communities::CommunityRepository,
    services::members::MemberService,
};

pub struct CommunityService {
    community_repo: Arc<dyn CommunityRepository>,
    member_service: Arc<MemberService>,
}

impl CommunityService {
    pub fn new(community_repo: Arc<dyn CommunityRepository>, member_service: Arc<MemberService>) -> Self {
        Self { community_repo, member_service }
    }

    async fn find_verified_community(&self, community_id: i64) -> AppResult<Community> {
        self.community_repo
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| AppError::NotFound("커뮤니티 글을 찾을 수 없습니다".to_string()))
    }

    /// 작성자가 아니면 `AuthorizationError`
    fn verify_owner(community: &Community, email: &str) -> AppResult<()> {
        if community.is_owned_by(email) {
            return Ok(());
        }

        log::warn!(
            "작성자가 아닌 회원의 변경 시도 - 글: {}, 요청자: {}",
            community.community_id,
            email
        );
        Err(AppError::AuthorizationError("작성자만 글을 수정하거나 삭제할 수 있습니다".to_string()))
    }

    pub async fn create_community(&self, email: &str, request: CommunityPostDto) -> AppResult<CommunityResponse> {
        let author = self.member_service.find_verified_member(email).await?;

        let community = self.community_repo
            .insert(post_dto_to_draft(request, &author))
            .await?;

        log::info!("커뮤니티 글 작성 - 번호: {}, 작성자: {}", community.community_id, email);

        Ok(CommunityResponse::from(community))
    }

    pub async fn find_community(&self, community_id: i64) -> AppResult<CommunityResponse> {
        self.find_verified_community(community_id)
            .await
            .map(CommunityResponse::from)
    }

    pub async fn find_communities(&self, request: &PageRequest) -> AppResult<Page<CommunityResponse>> {
        let page = self.community_repo.find_page(None, request).await?;
        Ok(page.map(CommunityResponse::from))
    }

    pub async fn find_my_communities(&self, email: &str, request: &PageRequest) -> AppResult<Page<CommunityResponse>> {
        let page = self.community_repo.find_page(Some(email), request).await?;
        Ok(page.map(CommunityResponse::from))
    }

    /// 본문의 `communityId`는 무시하고 경로의 번호를 사용합니다.
    pub async fn update_community(
        &self,
        community_id: i64,
        email: &str,
        patch: CommunityPatchDto,
    ) -> AppResult<CommunityResponse> {
        let mut community = self.find_verified_community(community_id).await?;
        Self::verify_owner(&community, email)?;

        if !community.apply_patch(CommunityPatch::from(patch)) {
            log::debug!("커뮤니티 글 변경 없음: {}", community_id);
            return Ok(CommunityResponse::from(community));
        }

        let updated = self.community_repo.update(community).await?;
        log::info!("커뮤니티 글 수정 - 번호: {}", community_id);

        Ok(CommunityResponse::from(updated))
    }

    pub async fn delete_community(&self, community_id: i64, email: &str) -> AppResult<()> {
        let community = self.find_verified_community(community_id).await?;
        Self::verify_owner(&community, email)?;

        if !self.community_repo.delete_by_id(community_id).await? {
            return Err(AppError::NotFound("커뮤니티 글을 찾을 수 없습니다".to_string()));
        }

        log::info!("커뮤니티 글 삭제 - 번호: {}", community_id);
        Ok(())
    }
}

#[async_trait]
impl Service for CommunityService {
    fn name(&self) -> &str {
        "community"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::members::SignupRequest;
    use crate::domain::entities::communities::CommunityType;
    use crate::repositories::communities::InMemoryCommunityRepository;
    use crate::repositories::members::InMemoryMemberRepository;

    const OWNER: &str = "owner@bookvillage.com";
    const OTHER: &str = "other@bookvillage.com";

    async fn service() -> CommunityService {
        let member_service = Arc::new(MemberService::new(Arc::new(InMemoryMemberRepository::new()), 4));

        for (email, display_name) in [(OWNER, "책벌레"), (OTHER, "독서왕")] {
            member_service
                .create_member(SignupRequest {
                    email: email.to_string(),
                    password: "password1234".to_string(),
                    name: "홍길동".to_string(),
                    display_name: display_name.to_string(),
                })
                .await
                .unwrap();
        }

        CommunityService::new(Arc::new(InMemoryCommunityRepository::new()), member_service)
    }

    fn post(title: &str) -> CommunityPostDto {
        CommunityPostDto {
            community_type: CommunityType::Free,
            title: title.to_string(),
            content: "content1".to_string(),
            display_name: None,
        }
    }

    #[actix_web::test]
    async fn test_create_uses_author_display_name() {
        let service = service().await;

        let created = service.create_community(OWNER, post("title1")).await.unwrap();

        assert_eq!(created.community_id, 1);
        assert_eq!(created.display_name, "책벌레");
        assert_eq!(created.created_at, created.modified_at);
    }

    #[actix_web::test]
    async fn test_create_by_unknown_member_is_not_found() {
        let service = service().await;

        let result = service.create_community("ghost@bookvillage.com", post("title1")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_title_only_patch() {
        let service = service().await;
        let created = service.create_community(OWNER, post("title1")).await.unwrap();

        let updated = service
            .update_community(
                created.community_id,
                OWNER,
                CommunityPatchDto { title: Some("title2".to_string()), ..Default::default() },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "title2");
        assert_eq!(updated.community_type, created.community_type);
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.display_name, created.display_name);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn test_non_owner_is_forbidden() {
        let service = service().await;
        let created = service.create_community(OWNER, post("title1")).await.unwrap();

        let update = service
            .update_community(
                created.community_id,
                OTHER,
                CommunityPatchDto { title: Some("hijack".to_string()), ..Default::default() },
            )
            .await;
        assert!(matches!(update, Err(AppError::AuthorizationError(_))));

        let delete = service.delete_community(created.community_id, OTHER).await;
        assert!(matches!(delete, Err(AppError::AuthorizationError(_))));

        assert_eq!(service.find_community(created.community_id).await.unwrap().title, "title1");
    }

    #[actix_web::test]
    async fn test_not_found_is_checked_before_ownership() {
        let service = service().await;

        let update = service.update_community(404, OTHER, CommunityPatchDto::default()).await;
        assert!(matches!(update, Err(AppError::NotFound(_))));

        let delete = service.delete_community(404, OTHER).await;
        assert!(matches!(delete, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_then_find_is_not_found() {
        let service = service().await;
        let created = service.create_community(OWNER, post("title1")).await.unwrap();

        service.delete_community(created.community_id, OWNER).await.unwrap();

        assert!(matches!(
            service.find_community(created.community_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_find_my_communities() {
        let service = service().await;
        service.create_community(OWNER, post("mine")).await.unwrap();
        service.create_community(OTHER, post("theirs")).await.unwrap();

        let mine = service.find_my_communities(OWNER, &PageRequest::default()).await.unwrap();
        let all = service.find_communities(&PageRequest::default()).await.unwrap();

        assert_eq!(mine.total_elements, 1);
        assert_eq!(mine.content[0].title, "mine");
        assert_eq!(all.total_elements, 2);
    }
}
