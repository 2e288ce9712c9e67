//! 메모리 회원 저장소
//!
//! 로컬 개발과 테스트용입니다. 프로세스가 끝나면 데이터도 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    domain::entities::members::Member,
    repositories::lock_poisoned,
};
use super::member_repo::MemberRepository;

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: RwLock<HashMap<String, Member>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for InMemoryMemberRepository {
    fn name(&self) -> &str {
        "member"
    }

    fn collection_name(&self) -> &str {
        "members"
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let members = self.members.read().map_err(lock_poisoned)?;
        Ok(members.get(email).cloned())
    }

    async fn insert(&self, member: Member) -> AppResult<Member> {
        let mut members = self.members.write().map_err(lock_poisoned)?;

        if members.contains_key(&member.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        members.insert(member.email.clone(), member.clone());
        Ok(member)
    }

    async fn update(&self, mut member: Member) -> AppResult<Member> {
        let mut members = self.members.write().map_err(lock_poisoned)?;

        let Some(stored) = members.get_mut(&member.email) else {
            return Err(AppError::NotFound("회원을 찾을 수 없습니다".to_string()));
        };

        member.modified_at = DateTime::now();
        *stored = member.clone();

        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(email: &str) -> Member {
        Member::new(
            email.to_string(),
            "hash".to_string(),
            "홍길동".to_string(),
            "책벌레".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_insert_and_find() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(member("reader@bookvillage.com")).await.unwrap();

        let found = repo.find_by_email("reader@bookvillage.com").await.unwrap();
        assert_eq!(found.unwrap().display_name, "책벌레");
        assert!(repo.find_by_email("nobody@bookvillage.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflicts() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(member("reader@bookvillage.com")).await.unwrap();

        let result = repo.insert(member("reader@bookvillage.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_missing_member_is_not_found() {
        let repo = InMemoryMemberRepository::new();

        let result = repo.update(member("ghost@bookvillage.com")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_stamps_modified_at() {
        let repo = InMemoryMemberRepository::new();
        let mut stored = repo.insert(member("reader@bookvillage.com")).await.unwrap();
        let created_at = stored.created_at;

        stored.display_name = "새닉네임".to_string();
        let updated = repo.update(stored).await.unwrap();

        assert_eq!(updated.created_at, created_at);
        assert!(updated.modified_at >= created_at);
        assert_eq!(
            repo.find_by_email("reader@bookvillage.com").await.unwrap().unwrap().display_name,
            "새닉네임"
        );
    }
}
