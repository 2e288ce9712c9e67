//! 회원 인증 핸들러
//!
//! `/v1/members/auth` 아래의 가입, 로그인, 재발급, 로그아웃 엔드포인트입니다.

use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::members::{LoginRequest, SignupRequest};
use crate::domain::dto::tokens::{ReissueRequest, TokenResponse};
use crate::domain::dto::{MessageResponse, SingleResponse};
use crate::domain::models::auth::AuthenticatedMember;
use crate::services::{MemberService, TokenService};

#[post("/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
    service: web::Data<MemberService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.create_member(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(SingleResponse::new(response)))
}

#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    member_service: web::Data<MemberService>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let member = member_service
        .verify_password(&payload.email, &payload.password)
        .await?;

    let token_pair = token_service
        .generate_token_pair(&member.email, &member.roles)
        .await?;

    log::info!("로그인 성공: {}", member.email);

    Ok(HttpResponse::Ok().json(SingleResponse::new(TokenResponse::from(token_pair))))
}

#[post("/reissue")]
pub async fn reissue(
    payload: web::Json<ReissueRequest>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token_pair = token_service.reissue(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(SingleResponse::new(TokenResponse::from(token_pair))))
}

/// 현재 액세스 토큰을 무효화하고 저장된 리프레시 토큰을 삭제합니다.
#[post("/logout")]
pub async fn logout(
    req: HttpRequest,
    _member: AuthenticatedMember,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    token_service.logout(token).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("logout completed!")))
}
