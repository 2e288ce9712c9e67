//! # DTO ↔ Entity Mappers
//!
//! 요청 DTO를 엔티티/패치로, 엔티티를 응답 DTO로 필드 단위 변환합니다.
//! 시각은 BSON 밀리초 타임스탬프에서 RFC 3339 직렬화용 `chrono::DateTime<Utc>`로 바뀝니다.

pub mod member_mapper;
pub mod community_mapper;

use chrono::{DateTime, Utc};

pub(crate) fn to_utc(dt: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_utc_keeps_millis() {
        let dt = mongodb::bson::DateTime::from_millis(1_700_000_000_123);
        assert_eq!(to_utc(dt).timestamp_millis(), 1_700_000_000_123);
    }
}
