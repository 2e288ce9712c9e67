use chrono::{DateTime, Utc};
use serde::Serialize;

/// 회원 응답 DTO. 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub email: String,
    pub name: String,
    pub display_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub img_url: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}
