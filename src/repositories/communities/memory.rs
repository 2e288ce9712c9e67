//! 메모리 커뮤니티 글 저장소

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    domain::entities::communities::Community,
    domain::models::page::{Page, PageRequest, SortDirection, SortField},
    repositories::lock_poisoned,
};
use super::community_repo::CommunityRepository;

#[derive(Default)]
pub struct InMemoryCommunityRepository {
    communities: RwLock<BTreeMap<i64, Community>>,
    sequence: AtomicI64,
}

impl InMemoryCommunityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Community, b: &Community, field: SortField) -> Ordering {
    let by_field = match field {
        SortField::CommunityId => Ordering::Equal,
        SortField::Type => a.community_type.as_str().cmp(b.community_type.as_str()),
        SortField::Title => a.title.cmp(&b.title),
        SortField::CreatedAt => a.created_at.timestamp_millis().cmp(&b.created_at.timestamp_millis()),
        SortField::ModifiedAt => a.modified_at.timestamp_millis().cmp(&b.modified_at.timestamp_millis()),
    };

    by_field.then(a.community_id.cmp(&b.community_id))
}

#[async_trait]
impl Repository for InMemoryCommunityRepository {
    fn name(&self) -> &str {
        "community"
    }

    fn collection_name(&self) -> &str {
        "communities"
    }
}

#[async_trait]
impl CommunityRepository for InMemoryCommunityRepository {
    async fn insert(&self, mut community: Community) -> AppResult<Community> {
        let now = DateTime::now();
        community.community_id = self.sequence.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        community.created_at = now;
        community.modified_at = now;

        let mut communities = self.communities.write().map_err(lock_poisoned)?;
        communities.insert(community.community_id, community.clone());

        Ok(community)
    }

    async fn update(&self, mut community: Community) -> AppResult<Community> {
        let mut communities = self.communities.write().map_err(lock_poisoned)?;

        let Some(stored) = communities.get_mut(&community.community_id) else {
            return Err(AppError::NotFound("커뮤니티 글을 찾을 수 없습니다".to_string()));
        };

        community.modified_at = DateTime::now();
        *stored = community.clone();

        Ok(community)
    }

    async fn find_by_id(&self, community_id: i64) -> AppResult<Option<Community>> {
        let communities = self.communities.read().map_err(lock_poisoned)?;
        Ok(communities.get(&community_id).cloned())
    }

    async fn find_page(&self, owner: Option<&str>, request: &PageRequest) -> AppResult<Page<Community>> {
        let communities = self.communities.read().map_err(lock_poisoned)?;

        let mut matched: Vec<&Community> = communities
            .values()
            .filter(|c| owner.is_none_or(|email| c.is_owned_by(email)))
            .collect();

        matched.sort_by(|a, b| {
            let ordering = compare(a, b, request.sort.field);
            match request.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matched.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);

        let content = matched
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn delete_by_id(&self, community_id: i64) -> AppResult<bool> {
        let mut communities = self.communities.write().map_err(lock_poisoned)?;
        Ok(communities.remove(&community_id).is_some())
    }
}
