use actix_web::{get, patch, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::members::MemberPatchDto;
use crate::domain::dto::SingleResponse;
use crate::domain::models::auth::AuthenticatedMember;
use crate::services::MemberService;

#[get("")]
pub async fn get_member(
    member: AuthenticatedMember,
    service: web::Data<MemberService>,
) -> Result<HttpResponse, AppError> {
    let response = service.find_member(&member.email).await?;

    Ok(HttpResponse::Ok().json(SingleResponse::new(response)))
}

#[patch("")]
pub async fn patch_member(
    member: AuthenticatedMember,
    payload: web::Json<MemberPatchDto>,
    service: web::Data<MemberService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.update_member(&member.email, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SingleResponse::new(response)))
}
