//! # 커뮤니티 글 리포지토리
//!
//! MongoDB `communities` 컬렉션에 글을 저장합니다.
//! 글 번호는 `counters` 컬렉션의 `$inc` upsert로 원자적으로 발급됩니다.
//!
//! ```text
//! counters: { _id: "communities", seq: 42 }
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::communities::Community,
    domain::models::page::{Page, PageRequest, SortField},
};

/// 커뮤니티 글 저장소 추상화
#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// 새 글 번호를 발급하고 생성/수정 시각을 같은 값으로 찍어 저장합니다.
    async fn insert(&self, community: Community) -> AppResult<Community>;

    /// 글 전체를 교체하고 `modified_at`을 갱신합니다. 없으면 `NotFound`입니다.
    async fn update(&self, community: Community) -> AppResult<Community>;

    async fn find_by_id(&self, community_id: i64) -> AppResult<Option<Community>>;

    /// `owner`가 주어지면 해당 회원의 글만 조회합니다.
    async fn find_page(&self, owner: Option<&str>, request: &PageRequest) -> AppResult<Page<Community>>;

    /// 삭제되었으면 `true`
    async fn delete_by_id(&self, community_id: i64) -> AppResult<bool>;
}

pub struct MongoCommunityRepository {
    db: Arc<Database>,
}

impl MongoCommunityRepository {
    pub const COLLECTION: &'static str = "communities";
    const COUNTERS: &'static str = "counters";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Community> {
        self.db.collection::<Community>(Self::COLLECTION)
    }

    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.db.collection::<Document>(Self::COUNTERS)
            .find_one_and_update(
                doc! { "_id": Self::COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("글 번호 발급에 실패했습니다".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("잘못된 글 번호 카운터: {}", e)))
    }

    fn sort_document(request: &PageRequest) -> Document {
        let order = request.sort.direction.as_mongo_order();
        let mut sort = Document::new();
        sort.insert(request.sort.field.storage_field(), order);

        // 같은 값끼리는 글 번호로 순서를 고정
        if request.sort.field != SortField::CommunityId {
            sort.insert("_id", order);
        }

        sort
    }
}

#[async_trait]
impl Repository for MongoCommunityRepository {
    fn name(&self) -> &str {
        "community"
    }

    fn collection_name(&self) -> &str {
        Self::COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "member_email": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("member_email_created_at".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([owner_index, created_at_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl CommunityRepository for MongoCommunityRepository {
    async fn insert(&self, mut community: Community) -> AppResult<Community> {
        let now = DateTime::now();
        community.community_id = self.next_id().await?;
        community.created_at = now;
        community.modified_at = now;

        self.collection().insert_one(&community).await?;

        Ok(community)
    }

    async fn update(&self, mut community: Community) -> AppResult<Community> {
        community.modified_at = DateTime::now();

        let result = self.collection()
            .replace_one(doc! { "_id": community.community_id }, &community)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("커뮤니티 글을 찾을 수 없습니다".to_string()));
        }

        Ok(community)
    }

    async fn find_by_id(&self, community_id: i64) -> AppResult<Option<Community>> {
        Ok(self.collection()
            .find_one(doc! { "_id": community_id })
            .await?)
    }

    async fn find_page(&self, owner: Option<&str>, request: &PageRequest) -> AppResult<Page<Community>> {
        let filter = match owner {
            Some(email) => doc! { "member_email": email },
            None => doc! {},
        };

        let total = self.collection()
            .count_documents(filter.clone())
            .await?;

        let limit = i64::try_from(request.size)
            .map_err(|_| AppError::ValidationError("잘못된 페이지 크기입니다".to_string()))?;

        let options = FindOptions::builder()
            .sort(Self::sort_document(request))
            .skip(request.offset())
            .limit(limit)
            .build();

        let content: Vec<Community> = self.collection()
            .find(filter)
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        Ok(Page::new(content, request, total))
    }

    async fn delete_by_id(&self, community_id: i64) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": community_id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
