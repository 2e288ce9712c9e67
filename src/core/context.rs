//! # Application Context
//!
//! 리포지토리와 서비스를 생성자 주입으로 조립한 결과입니다.
//! 핸들러는 `web::Data<...Service>`로 각 서비스를 전달받습니다.

use std::sync::Arc;
use crate::{
    caching::redis::RedisClient,
    config::{JwtSettings, PasswordConfig, StorageBackend, StorageConfig},
    core::errors::AppResult,
    core::registry::ServiceRegistry,
    db::Database,
    repositories::{
        communities::{CommunityRepository, InMemoryCommunityRepository, MongoCommunityRepository},
        members::{InMemoryMemberRepository, MemberRepository, MongoMemberRepository},
        tokens::{InMemoryTokenRepository, RedisTokenRepository, TokenRepository},
    },
    services::{CommunityService, MemberService, TokenService},
};

#[derive(Clone)]
pub struct AppContext {
    pub member_service: Arc<MemberService>,
    pub community_service: Arc<CommunityService>,
    pub token_service: Arc<TokenService>,
    registry: Arc<ServiceRegistry>,
}

struct Repositories {
    members: Arc<dyn MemberRepository>,
    communities: Arc<dyn CommunityRepository>,
    tokens: Arc<dyn TokenRepository>,
}

impl AppContext {
    /// `STORAGE_BACKEND` 설정에 따라 저장소를 선택해 조립합니다.
    pub async fn from_config() -> AppResult<Self> {
        let settings = JwtSettings::from_env();
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        match StorageConfig::backend() {
            StorageBackend::Mongo => {
                let db = Arc::new(Database::new().await?);
                let redis = Arc::new(RedisClient::new().await?);
                Ok(Self::with_stores(db, redis, settings, bcrypt_cost))
            }
            StorageBackend::Memory => {
                log::warn!("⚠️ 인메모리 저장소 사용 - 재시작 시 데이터가 사라집니다");
                Ok(Self::in_memory(settings, bcrypt_cost))
            }
        }
    }

    /// MongoDB와 Redis를 사용하는 운영 구성
    pub fn with_stores(db: Arc<Database>, redis: Arc<RedisClient>, settings: JwtSettings, bcrypt_cost: u32) -> Self {
        let mut registry = ServiceRegistry::new();

        let members = Arc::new(MongoMemberRepository::new(db.clone(), redis.clone()));
        let communities = Arc::new(MongoCommunityRepository::new(db));
        let tokens = Arc::new(RedisTokenRepository::new(redis));

        registry.register_repository(members.clone());
        registry.register_repository(communities.clone());
        registry.register_repository(tokens.clone());

        let repositories = Repositories { members, communities, tokens };
        Self::assemble(repositories, registry, settings, bcrypt_cost)
    }

    /// 외부 저장소 없이 동작하는 구성 (로컬 개발, 테스트)
    pub fn in_memory(settings: JwtSettings, bcrypt_cost: u32) -> Self {
        let mut registry = ServiceRegistry::new();

        let members = Arc::new(InMemoryMemberRepository::new());
        let communities = Arc::new(InMemoryCommunityRepository::new());
        let tokens = Arc::new(InMemoryTokenRepository::new());

        registry.register_repository(members.clone());
        registry.register_repository(communities.clone());
        registry.register_repository(tokens.clone());

        let repositories = Repositories { members, communities, tokens };
        Self::assemble(repositories, registry, settings, bcrypt_cost)
    }

    fn assemble(repositories: Repositories, mut registry: ServiceRegistry, settings: JwtSettings, bcrypt_cost: u32) -> Self {
        let Repositories { members, communities, tokens } = repositories;

        let member_service = Arc::new(MemberService::new(members, bcrypt_cost));
        let community_service = Arc::new(CommunityService::new(communities, member_service.clone()));
        let token_service = Arc::new(TokenService::new(tokens, settings));

        registry.register_service(member_service.clone());
        registry.register_service(community_service.clone());
        registry.register_service(token_service.clone());

        Self {
            member_service,
            community_service,
            token_service,
            registry: Arc::new(registry),
        }
    }

    /// 리포지토리 초기화(인덱스 생성 등) 후 서비스 초기화 훅을 실행합니다.
    pub async fn initialize(&self) -> AppResult<()> {
        self.registry.initialize_all().await
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }
}
