//! Community Entity Implementation
//!
//! 회원이 작성하는 커뮤니티 글입니다.
//! 식별자와 생성/수정 시각은 리포지토리가 저장 시점에 부여합니다.
//! 작성자(`member_email`)는 생성 이후 절대 바뀌지 않습니다.

use std::fmt;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::utils::merge::merge_field;

/// 커뮤니티 글 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunityType {
    Notice,
    Free,
    Study,
    Recommend,
}

impl CommunityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunityType::Notice => "notice",
            CommunityType::Free => "free",
            CommunityType::Study => "study",
            CommunityType::Recommend => "recommend",
        }
    }
}

impl fmt::Display for CommunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    #[serde(rename = "_id")]
    pub community_id: i64,
    #[serde(rename = "type")]
    pub community_type: CommunityType,
    pub title: String,
    pub content: String,
    pub display_name: String,
    /// 작성 회원의 식별자 (다대일)
    pub member_email: String,
    pub created_at: DateTime,
    pub modified_at: DateTime,
}

/// 커뮤니티 글 부분 수정 내용
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommunityPatch {
    pub community_type: Option<CommunityType>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub display_name: Option<String>,
}

impl Community {
    /// 아직 저장되지 않은 글을 만듭니다. `community_id`는 저장 시 부여됩니다.
    pub fn draft(
        community_type: CommunityType,
        title: String,
        content: String,
        display_name: String,
        member_email: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            community_id: 0,
            community_type,
            title,
            content,
            display_name,
            member_email,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.member_email == email
    }

    /// 패치를 병합하고 변경 여부를 반환합니다.
    pub fn apply_patch(&mut self, patch: CommunityPatch) -> bool {
        let CommunityPatch { community_type, title, content, display_name } = patch;

        let changes = [
            merge_field(&mut self.community_type, community_type),
            merge_field(&mut self.title, title),
            merge_field(&mut self.content, content),
            merge_field(&mut self.display_name, display_name),
        ];

        changes.contains(&true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn community() -> Community {
        Community::draft(
            CommunityType::Free,
            "title1".to_string(),
            "content1".to_string(),
            "displayName1".to_string(),
            "owner@bookvillage.com".to_string(),
        )
    }

    #[test]
    fn test_community_type_wire_names() {
        assert_eq!(serde_json::to_string(&CommunityType::Recommend).unwrap(), "\"recommend\"");
        assert_eq!(
            serde_json::from_str::<CommunityType>("\"notice\"").unwrap(),
            CommunityType::Notice
        );
        assert!(serde_json::from_str::<CommunityType>("\"qna\"").is_err());
    }

    #[test]
    fn test_title_only_patch_keeps_other_fields() {
        let mut community = community();

        let changed = community.apply_patch(CommunityPatch {
            title: Some("title2".to_string()),
            ..Default::default()
        });

        assert!(changed);
        assert_eq!(community.title, "title2");
        assert_eq!(community.community_type, CommunityType::Free);
        assert_eq!(community.content, "content1");
        assert_eq!(community.display_name, "displayName1");
        assert_eq!(community.member_email, "owner@bookvillage.com");
    }

    #[test]
    fn test_ownership() {
        let community = community();

        assert!(community.is_owned_by("owner@bookvillage.com"));
        assert!(!community.is_owned_by("other@bookvillage.com"));
    }
}
