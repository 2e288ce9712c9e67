//! # 회원 리포지토리
//!
//! MongoDB `members` 컬렉션을 주 저장소로 사용하고, 이메일 조회 결과를 Redis에 10분간 캐싱합니다.
//! 회원 문서의 `_id`는 이메일이므로 별도 유니크 인덱스가 필요하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::{doc, DateTime};
use mongodb::error::{ErrorKind, WriteFailure};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::members::Member,
};

const MEMBER_CACHE_TTL_SECONDS: u64 = 600;
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 회원 저장소 추상화
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    /// 새 회원을 저장합니다. 이미 가입된 이메일이면 `ConflictError`입니다.
    async fn insert(&self, member: Member) -> AppResult<Member>;

    /// 회원 전체를 교체하고 `modified_at`을 갱신합니다. 없으면 `NotFound`입니다.
    async fn update(&self, member: Member) -> AppResult<Member>;
}

pub struct MongoMemberRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MongoMemberRepository {
    pub const COLLECTION: &'static str = "members";

    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> mongodb::Collection<Member> {
        self.db.collection::<Member>(Self::COLLECTION)
    }

    fn cache_key(email: &str) -> String {
        format!("member:email:{}", email)
    }

    async fn invalidate_cache(&self, email: &str) {
        if let Err(e) = self.redis.del(&Self::cache_key(email)).await {
            log::warn!("회원 캐시 무효화 실패 - {}: {}", email, e);
        }
    }
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        &*e.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl Repository for MongoMemberRepository {
    fn name(&self) -> &str {
        "member"
    }

    fn collection_name(&self) -> &str {
        Self::COLLECTION
    }
}

#[async_trait]
impl MemberRepository for MongoMemberRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let cache_key = Self::cache_key(email);

        // 캐시에서 먼저 확인
        if let Ok(Some(cached)) = self.redis.get::<Member>(&cache_key).await {
            return Ok(Some(cached));
        }

        let member = self.collection()
            .find_one(doc! { "_id": email })
            .await?;

        if let Some(ref member) = member {
            let _ = self.redis
                .set_with_expiry(&cache_key, member, MEMBER_CACHE_TTL_SECONDS)
                .await;
        }

        Ok(member)
    }

    async fn insert(&self, member: Member) -> AppResult<Member> {
        match self.collection().insert_one(&member).await {
            Ok(_) => {
                log::info!("회원 저장 완료: {}", member.email);
                Ok(member)
            }
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, mut member: Member) -> AppResult<Member> {
        member.modified_at = DateTime::now();

        let result = self.collection()
            .replace_one(doc! { "_id": &member.email }, &member)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("회원을 찾을 수 없습니다".to_string()));
        }

        self.invalidate_cache(&member.email).await;

        Ok(member)
    }
}
