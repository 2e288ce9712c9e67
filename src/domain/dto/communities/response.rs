use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::entities::communities::CommunityType;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityResponse {
    pub community_id: i64,
    #[serde(rename = "type")]
    pub community_type: CommunityType,
    pub title: String,
    pub content: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}
