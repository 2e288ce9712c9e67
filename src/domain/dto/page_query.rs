//! 목록 조회 쿼리 파라미터
//!
//! `?page=0&size=10&sort=createdAt,desc`

use serde::Deserialize;
use validator::Validate;
use crate::domain::models::page::{PageRequest, Sort, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PageQuery {
    #[validate(range(max = 1000000, message = "page는 1000000 이하여야 합니다"))]
    pub page: Option<u64>,

    #[validate(range(min = 1, max = 100, message = "size는 1에서 100 사이여야 합니다"))]
    pub size: Option<u64>,

    pub sort: Option<String>,
}

impl PageQuery {
    pub fn to_page_request(&self) -> PageRequest {
        let sort = self.sort.as_deref().map(Sort::parse).unwrap_or_default();

        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        )
    }
}
