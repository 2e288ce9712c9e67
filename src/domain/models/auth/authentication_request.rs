/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 유효한 토큰이 반드시 있어야 함
    Required,
    /// 토큰이 있으면 검증하고 없으면 익명으로 통과
    Optional,
}
