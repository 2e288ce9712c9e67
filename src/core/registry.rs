//! # Component Registry
//!
//! 애플리케이션 부팅 시 생성된 리포지토리와 서비스를 등록하고,
//! 등록 순서대로 초기화 훅(`init`)을 실행하는 레지스트리입니다.
//!
//! 의존성은 생성자 인자로 직접 전달되며, 레지스트리는 생명주기 관리만 담당합니다.
//! 리포지토리가 먼저 초기화되고(인덱스 생성 등), 그다음 서비스가 초기화됩니다.
//!
//! ```rust,ignore
//! let mut registry = ServiceRegistry::new();
//! registry.register_repository(member_repo.clone());
//! registry.register_service(member_service.clone());
//! registry.initialize_all().await?;
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 레지스트리가 관리하는 서비스 컴포넌트
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }
}

/// 레지스트리가 관리하는 리포지토리 컴포넌트
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    /// 저장소 상의 컬렉션(또는 키 프리픽스) 이름
    fn collection_name(&self) -> &str;

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct ServiceRegistry {
    repositories: Vec<Arc<dyn Repository>>,
    services: Vec<Arc<dyn Service>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_repository(&mut self, repository: Arc<dyn Repository>) {
        log::debug!("📦 Registering repository: {}", repository.name());
        self.repositories.push(repository);
    }

    pub fn register_service(&mut self, service: Arc<dyn Service>) {
        log::debug!("📦 Registering service: {}", service.name());
        self.services.push(service);
    }

    pub fn repository_count(&self) -> usize {
        self.repositories.len()
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// 등록된 모든 컴포넌트를 초기화합니다.
    ///
    /// 하나라도 실패하면 즉시 에러를 반환하며, 이후 컴포넌트는 초기화하지 않습니다.
    pub async fn initialize_all(&self) -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        if !self.repositories.is_empty() {
            print_step_start(1, "Initializing repositories");

            for repository in &self.repositories {
                print_sub_task(repository.name(), repository.collection_name());
                repository.init().await?;
                print_sub_task(repository.name(), "✓ Ready");
            }

            print_step_complete(1, "Repositories initialized", self.repositories.len());
        }

        if !self.services.is_empty() {
            print_step_start(2, "Initializing services");

            for service in &self.services {
                service.init().await?;
                print_sub_task(service.name(), "✓ Ready");
            }

            print_step_complete(2, "Services initialized", self.services.len());
        }

        print_final_summary(self.repositories.len(), self.services.len());

        Ok(())
    }
}
