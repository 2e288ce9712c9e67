use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 액세스 토큰에서 추출된 회원 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedMember {
    /// 회원 이메일 (로그인 이름)
    pub email: String,

    /// 회원 역할 목록
    pub roles: Vec<String>,
}

/// 미들웨어가 요청 확장에 넣어둔 회원을 꺼냅니다. 없으면 401입니다.
impl FromRequest for AuthenticatedMember {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedMember>() {
            Some(member) => ready(Ok(member.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use crate::domain::entities::members::ROLE_USER;

    fn member(roles: &[&str]) -> AuthenticatedMember {
        AuthenticatedMember {
            email: "reader@bookvillage.com".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[actix_web::test]
    async fn test_extract_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(member(&[ROLE_USER]));

        let extracted = AuthenticatedMember::extract(&req).await.unwrap();
        assert_eq!(extracted.email, "reader@bookvillage.com");
        assert_eq!(extracted.roles, vec![ROLE_USER.to_string()]);
    }

    #[actix_web::test]
    async fn test_extract_without_member_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let err = AuthenticatedMember::extract(&req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), 401);
    }
}
