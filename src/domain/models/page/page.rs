//! 페이지 요청과 페이지 결과
//!
//! 페이지 번호는 0부터 시작합니다. 정렬은 `field,direction` 형식의 문자열로 받으며
//! 알 수 없는 필드나 방향은 기본값(`createdAt,desc`)으로 대체됩니다.

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// 요청 가능한 가장 큰 페이지 번호. 오프셋이 i64 범위를 넘지 않도록 제한합니다.
pub const MAX_PAGE: u64 = 1_000_000;

/// 정렬 가능한 커뮤니티 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CommunityId,
    Type,
    Title,
    CreatedAt,
    ModifiedAt,
}

impl SortField {
    /// API에서 쓰는 camelCase 이름으로부터 변환합니다.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "communityId" => Some(SortField::CommunityId),
            "type" => Some(SortField::Type),
            "title" => Some(SortField::Title),
            "createdAt" => Some(SortField::CreatedAt),
            "modifiedAt" => Some(SortField::ModifiedAt),
            _ => None,
        }
    }

    /// 저장소 문서의 필드 이름
    pub fn storage_field(&self) -> &'static str {
        match self {
            SortField::CommunityId => "_id",
            SortField::Type => "type",
            SortField::Title => "title",
            SortField::CreatedAt => "created_at",
            SortField::ModifiedAt => "modified_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_mongo_order(&self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl Sort {
    /// `"createdAt,desc"` 형식을 해석합니다. 방향이 없으면 오름차순입니다.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(',').map(str::trim);

        let Some(field) = parts.next().and_then(SortField::from_wire) else {
            log::debug!("알 수 없는 정렬 필드 '{}', 기본 정렬 사용", raw);
            return Self::default();
        };

        let direction = match parts.next().map(str::to_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                log::debug!("알 수 없는 정렬 방향 '{}', 기본 정렬 사용", other);
                return Self::default();
            }
        };

        Self { field, direction }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, size: u64, sort: Sort) -> Self {
        Self {
            page: page.min(MAX_PAGE),
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// 한 페이지 분량의 결과와 전체 개수
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
