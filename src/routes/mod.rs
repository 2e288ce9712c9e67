//! # Routes
//!
//! 모든 엔드포인트와 앱 데이터(서비스, 추출기 설정)를 등록합니다.
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | GET / PATCH | `/v1/members` | 필수 |
//! | POST | `/v1/members/auth/{signup,login,reissue}` | - |
//! | POST | `/v1/members/auth/logout` | 필수 |
//! | POST | `/v1/communities` | 필수 |
//! | GET | `/v1/communities`, `/v1/communities/{id}` | - |
//! | GET | `/v1/communities/mine` | 필수 |
//! | PATCH / DELETE | `/v1/communities/{id}` | 필수 (작성자) |
//! | GET | `/health` | - |
//!
//! 회원 정보 스코프는 필수 인증 미들웨어로 감쌉니다. 공개 조회와 인증이 필요한
//! 요청이 섞인 스코프는 선택적 인증을 쓰고, 인증이 필요한 핸들러는
//! `AuthenticatedMember` 추출기로 401을 돌려줍니다.

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::config::StorageConfig;
use crate::core::{AppContext, AppError};
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 서비스와 라우트를 등록합니다.
///
/// ```rust,ignore
/// let context = AppContext::in_memory(JwtSettings::from_env(), 4);
/// let app = App::new().configure(|cfg| configure_all_routes(cfg, &context));
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, context: &AppContext) {
    cfg.app_data(web::Data::from(context.member_service.clone()))
        .app_data(web::Data::from(context.community_service.clone()))
        .app_data(web::Data::from(context.token_service.clone()));

    configure_extractors(cfg);

    cfg.service(health_check);

    configure_member_routes(cfg);
    configure_community_routes(cfg);
}

/// 잘못된 JSON 본문, 쿼리, 경로 파라미터를 `ValidationError`(400)로 변환합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));
}

fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    // "/v1/members/auth"가 "/v1/members"보다 먼저 등록되어야 함
    cfg.service(
        web::scope("/v1/members/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            .service(handlers::auth::reissue)
            .service(handlers::auth::logout)
    )
    .service(
        web::scope("/v1/members")
            .wrap(AuthMiddleware::required())
            .service(handlers::members::get_member)
            .service(handlers::members::patch_member)
    );
}

fn configure_community_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/communities")
            .wrap(AuthMiddleware::optional())
            .service(handlers::communities::post_community)
            .service(handlers::communities::get_communities)
            // "/mine"이 "/{community_id}"보다 먼저 등록되어야 함
            .service(handlers::communities::get_my_communities)
            .service(handlers::communities::get_community)
            .service(handlers::communities::patch_community)
            .service(handlers::communities::delete_community)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "book_village_server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": StorageConfig::backend().as_str(),
            "authentication": "JWT (HS256)"
        }
    }))
}
