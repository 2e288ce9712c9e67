//! 통합 테스트 공용 헬퍼
//!
//! 각 테스트는 독립된 인메모리 `AppContext`로 앱을 띄웁니다.

#![allow(dead_code, unused_macros)]

use book_village_server::config::JwtSettings;
use book_village_server::core::AppContext;

pub const PASSWORD: &str = "password1234";

pub fn context() -> AppContext {
    AppContext::in_memory(
        JwtSettings {
            secret: "integration-test-secret".to_string(),
            access_expiration_minutes: 30,
            refresh_expiration_days: 7,
        },
        4,
    )
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// 라우트가 모두 등록된 테스트 서비스
macro_rules! init_app {
    ($context:expr) => {{
        let context = $context.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| book_village_server::routes::configure_all_routes(cfg, &context)),
        )
        .await
    }};
}

/// 가입 후 로그인하여 토큰 응답(`data`)을 돌려줍니다.
macro_rules! signup_and_login {
    ($app:expr, $email:expr, $display_name:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/v1/members/auth/signup")
            .set_json(serde_json::json!({
                "email": $email,
                "password": common::PASSWORD,
                "name": "홍길동",
                "displayName": $display_name
            }))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let req = actix_web::test::TestRequest::post()
            .uri("/v1/members/auth/login")
            .set_json(serde_json::json!({ "email": $email, "password": common::PASSWORD }))
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;
        body["data"].clone()
    }};
}

/// 로그인한 회원의 액세스 토큰
macro_rules! access_token {
    ($app:expr, $email:expr, $display_name:expr) => {{
        let tokens = signup_and_login!($app, $email, $display_name);
        tokens["accessToken"]
            .as_str()
            .expect("access token")
            .to_string()
    }};
}
