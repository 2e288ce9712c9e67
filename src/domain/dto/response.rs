use serde::Serialize;
use crate::domain::models::page::Page;

/// 단건 응답 봉투
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T> {
    pub data: T,
}

impl<T> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// 목록 응답의 페이지 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 0부터 시작하는 현재 페이지
    pub current_page: u64,
    pub total_page: u64,
    pub total_elements: u64,
    pub page_size: u64,
    pub first: bool,
    pub last: bool,
    pub current_elements: usize,
}

impl<T> From<&Page<T>> for PageInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            current_page: page.page,
            total_page: page.total_pages(),
            total_elements: page.total_elements,
            page_size: page.size,
            first: page.is_first(),
            last: page.is_last(),
            current_elements: page.content.len(),
        }
    }
}

/// 목록 응답 봉투
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiResponse<T> {
    pub data: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> From<Page<T>> for MultiResponse<T> {
    fn from(page: Page<T>) -> Self {
        let page_info = PageInfo::from(&page);

        Self {
            data: page.content,
            page_info,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
