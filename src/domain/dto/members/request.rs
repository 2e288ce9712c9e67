//! 회원 요청 DTO
//!
//! 가입, 로그인, 프로필 부분 수정 요청을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 회원 가입 요청
///
/// ```json
/// {
///   "email": "reader@bookvillage.com",
///   "password": "password1234",
///   "name": "홍길동",
///   "displayName": "책벌레"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, max = 64, message = "비밀번호는 8-64자 사이여야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "닉네임은 1-50자 사이여야 합니다"))]
    pub display_name: String,
}

/// 로그인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 회원 정보 부분 수정 요청. 빠지거나 `null`인 필드는 바뀌지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatchDto {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "닉네임은 1-50자 사이여야 합니다"))]
    pub display_name: Option<String>,

    #[validate(length(max = 20, message = "전화번호는 20자 이하여야 합니다"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 200, message = "주소는 200자 이하여야 합니다"))]
    pub address: Option<String>,

    #[validate(length(max = 500, message = "이미지 URL은 500자 이하여야 합니다"))]
    pub img_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        let valid: SignupRequest = serde_json::from_value(serde_json::json!({
            "email": "reader@bookvillage.com",
            "password": "password1234",
            "name": "홍길동",
            "displayName": "책벌레"
        }))
        .unwrap();
        assert!(valid.validate().is_ok());

        let short_password = SignupRequest { password: "short".to_string(), ..valid.clone() };
        assert!(short_password.validate().is_err());

        let bad_email = SignupRequest { email: "not-an-email".to_string(), ..valid };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_patch_accepts_missing_and_null_fields() {
        let patch: MemberPatchDto = serde_json::from_value(serde_json::json!({
            "displayName": "새닉네임",
            "address": null
        }))
        .unwrap();

        assert!(patch.validate().is_ok());
        assert_eq!(patch.display_name.as_deref(), Some("새닉네임"));
        assert!(patch.name.is_none());
        assert!(patch.address.is_none());
    }

    #[test]
    fn test_patch_rejects_blank_display_name() {
        let patch = MemberPatchDto { display_name: Some(String::new()), ..Default::default() };
        assert!(patch.validate().is_err());
    }
}
