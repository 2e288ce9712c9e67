//! 부분 수정(PATCH) 병합 유틸리티
//!
//! 패치 객체의 각 필드는 `Option`으로 표현됩니다.
//! `Some`이면 기존 값을 덮어쓰고, `None`이면 기존 값을 그대로 유지합니다.

/// 패치 값이 있을 때만 대상 필드를 덮어씁니다.
///
/// 값이 실제로 바뀌었는지 여부를 반환합니다.
///
/// ```rust,ignore
/// let mut title = "old".to_string();
/// merge_field(&mut title, Some("new".to_string()));
/// assert_eq!(title, "new");
/// ```
pub fn merge_field<T: PartialEq>(target: &mut T, patch: Option<T>) -> bool {
    match patch {
        Some(value) if *target != value => {
            *target = value;
            true
        }
        _ => false,
    }
}

/// 선택 필드(`Option<T>`)용 병합 함수
///
/// 패치에 값이 없으면 기존 값(값이 없던 상태 포함)을 유지합니다.
pub fn merge_optional<T: PartialEq>(target: &mut Option<T>, patch: Option<T>) -> bool {
    match patch {
        Some(value) if target.as_ref() != Some(&value) => {
            *target = Some(value);
            true
        }
        _ => false,
    }
}
