//! Member Entity Implementation
//!
//! 회원 엔티티입니다. 로그인 이름(이메일)이 곧 문서의 `_id`이며,
//! 가입 이후에는 부분 수정만 가능하고 물리적으로 삭제되지 않습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::utils::merge::{merge_field, merge_optional};

pub const ROLE_USER: &str = "USER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// 로그인 이름 (식별자)
    #[serde(rename = "_id")]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime,
    pub modified_at: DateTime,
}

/// 회원 프로필 부분 수정 내용
///
/// `None`인 필드는 "변경 없음"을 의미합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub img_url: Option<String>,
}

impl Member {
    pub fn new(email: String, password_hash: String, name: String, display_name: String) -> Self {
        let now = DateTime::now();

        Self {
            email,
            password_hash,
            name,
            display_name,
            phone_number: None,
            address: None,
            img_url: None,
            roles: vec![ROLE_USER.to_string()],
            created_at: now,
            modified_at: now,
        }
    }

    /// 패치를 병합하고 변경 여부를 반환합니다. 식별자와 비밀번호는 바뀌지 않습니다.
    pub fn apply_patch(&mut self, patch: MemberPatch) -> bool {
        let MemberPatch { name, display_name, phone_number, address, img_url } = patch;

        // 단락 평가를 피하기 위해 각 필드를 먼저 병합
        let changes = [
            merge_field(&mut self.name, name),
            merge_field(&mut self.display_name, display_name),
            merge_optional(&mut self.phone_number, phone_number),
            merge_optional(&mut self.address, address),
            merge_optional(&mut self.img_url, img_url),
        ];

        changes.contains(&true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member::new(
            "reader@bookvillage.com".to_string(),
            "hash".to_string(),
            "Kim".to_string(),
            "bookworm".to_string(),
        )
    }

    #[test]
    fn test_new_member_defaults() {
        let member = member();

        assert_eq!(member.roles, vec![ROLE_USER.to_string()]);
        assert_eq!(member.created_at, member.modified_at);
        assert!(member.phone_number.is_none());
    }

    #[test]
    fn test_apply_patch_only_touches_present_fields() {
        let mut member = member();
        member.address = Some("Seoul".to_string());

        let changed = member.apply_patch(MemberPatch {
            display_name: Some("page-turner".to_string()),
            ..Default::default()
        });

        assert!(changed);
        assert_eq!(member.display_name, "page-turner");
        assert_eq!(member.name, "Kim");
        assert_eq!(member.address.as_deref(), Some("Seoul"));
        assert_eq!(member.email, "reader@bookvillage.com");
    }

    #[test]
    fn test_empty_patch_reports_no_change() {
        let mut member = member();
        let before = member.clone();

        assert!(!member.apply_patch(MemberPatch::default()));
        assert_eq!(member, before);
    }
}
