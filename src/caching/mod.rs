//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 키-값 저장소를 제공합니다.
//! 토큰 저장과 회원 조회 캐시에 사용됩니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
