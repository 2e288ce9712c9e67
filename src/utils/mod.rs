//! 공통 유틸리티 함수 모듈
//!
//! - [`merge`] - PATCH 요청의 부분 수정 병합
//! - [`display_terminal`] - 부팅 시 터미널 출력 포맷팅

pub mod merge;
pub mod display_terminal;
