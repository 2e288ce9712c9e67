//! # Repository Layer
//!
//! 저장소 접근을 트레이트로 추상화하고 두 가지 구현을 제공합니다.
//!
//! | 트레이트 | 운영 구현 | 메모리 구현 |
//! |----------|-----------|-------------|
//! | `MemberRepository` | MongoDB + Redis 캐시 | `InMemoryMemberRepository` |
//! | `CommunityRepository` | MongoDB + `counters` 시퀀스 | `InMemoryCommunityRepository` |
//! | `TokenRepository` | Redis | `InMemoryTokenRepository` |
//!
//! 식별자 발급과 생성/수정 시각 기록은 리포지토리가 책임집니다.

pub mod members;
pub mod communities;
pub mod tokens;

use crate::core::errors::AppError;

pub(crate) fn lock_poisoned<E>(_: E) -> AppError {
    AppError::InternalError("저장소 잠금이 손상되었습니다".to_string())
}
