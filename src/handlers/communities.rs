//! 커뮤니티 글 핸들러
//!
//! 조회는 누구나 가능하고, 작성/수정/삭제와 "내 글" 목록은 인증이 필요합니다.
//! 수정과 삭제는 서비스 계층에서 작성자 여부를 확인합니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::communities::{CommunityPatchDto, CommunityPostDto};
use crate::domain::dto::{MultiResponse, PageQuery, SingleResponse};
use crate::domain::models::auth::AuthenticatedMember;
use crate::services::CommunityService;

#[post("")]
pub async fn post_community(
    member: AuthenticatedMember,
    payload: web::Json<CommunityPostDto>,
    service: web::Data<CommunityService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.create_community(&member.email, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(SingleResponse::new(response)))
}

#[get("")]
pub async fn get_communities(
    query: web::Query<PageQuery>,
    service: web::Data<CommunityService>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let page = service.find_communities(&query.to_page_request()).await?;

    Ok(HttpResponse::Ok().json(MultiResponse::from(page)))
}

#[get("/mine")]
pub async fn get_my_communities(
    member: AuthenticatedMember,
    query: web::Query<PageQuery>,
    service: web::Data<CommunityService>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let page = service.find_my_communities(&member.email, &query.to_page_request()).await?;

    Ok(HttpResponse::Ok().json(MultiResponse::from(page)))
}

#[get("/{community_id}")]
pub async fn get_community(
    community_id: web::Path<i64>,
    service: web::Data<CommunityService>,
) -> Result<HttpResponse, AppError> {
    let response = service.find_community(community_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SingleResponse::new(response)))
}

#[patch("/{community_id}")]
pub async fn patch_community(
    community_id: web::Path<i64>,
    member: AuthenticatedMember,
    payload: web::Json<CommunityPatchDto>,
    service: web::Data<CommunityService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service
        .update_community(community_id.into_inner(), &member.email, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(SingleResponse::new(response)))
}

#[delete("/{community_id}")]
pub async fn delete_community(
    community_id: web::Path<i64>,
    member: AuthenticatedMember,
    service: web::Data<CommunityService>,
) -> Result<HttpResponse, AppError> {
    service.delete_community(community_id.into_inner(), &member.email).await?;

    Ok(HttpResponse::NoContent().finish())
}
