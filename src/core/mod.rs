//! # Core Module
//!
//! 서버 전역에서 공유하는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//!
//! ### [`registry`] - 컴포넌트 생명주기
//! - **ServiceRegistry**: 리포지토리/서비스 등록 및 부팅 시 초기화
//!
//! ### [`context`] - 애플리케이션 조립
//! - **AppContext**: 저장소 선택(MongoDB/Redis 또는 인메모리)에 따라
//!   리포지토리와 서비스를 생성자 주입으로 조립합니다.
//!
//! ## 조립 흐름
//!
//! ```text
//! StorageConfig ──▶ Repositories ──▶ Services ──▶ AppContext
//!                        │               │
//!                        └──── ServiceRegistry::initialize_all()
//! ```

pub mod errors;
pub mod registry;
pub mod context;

pub use errors::*;
pub use registry::*;
pub use context::AppContext;
