//! # 회원 서비스
//!
//! 가입, 프로필 조회/부분 수정, 비밀번호 검증을 담당합니다.
//!
//! ```text
//! MemberService
//! ├── create_member    가입 (bcrypt 해싱, 기본 역할 USER)
//! ├── find_member      프로필 조회
//! ├── update_member    조회 → 병합 → 저장
//! └── verify_password  로그인 자격 증명 확인
//!          │
//!          ▼
//!   dyn MemberRepository (MongoDB + Redis / 메모리)
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Service,
    domain::dto::members::{MemberPatchDto, MemberResponse, SignupRequest},
    domain::entities::members::{Member, MemberPatch},
    repositories::members::MemberRepository,
};

pub struct MemberService {
    member_repo: Arc<dyn MemberRepository>,
    bcrypt_cost: u32,
}

fn member_not_found() -> AppError {
    AppError::NotFound("회원을 찾을 수 없습니다".to_string())
}

fn invalid_credentials() -> AppError {
    AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string())
}

impl MemberService {
    pub fn new(member_repo: Arc<dyn MemberRepository>, bcrypt_cost: u32) -> Self {
        Self { member_repo, bcrypt_cost }
    }

    pub async fn create_member(&self, request: SignupRequest) -> AppResult<MemberResponse> {
        let SignupRequest { email, password, name, display_name } = request;

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(&password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let member = self.member_repo
            .insert(Member::new(email, password_hash, name, display_name))
            .await?;

        log::info!("회원 가입 완료: {}", member.email);

        Ok(MemberResponse::from(member))
    }

    /// 엔티티 그대로 조회합니다. 다른 서비스가 작성자 정보를 얻을 때 사용합니다.
    pub async fn find_verified_member(&self, email: &str) -> AppResult<Member> {
        self.member_repo
            .find_by_email(email)
            .await?
            .ok_or_else(member_not_found)
    }

    pub async fn find_member(&self, email: &str) -> AppResult<MemberResponse> {
        self.find_verified_member(email).await.map(MemberResponse::from)
    }

    pub async fn update_member(&self, email: &str, patch: MemberPatchDto) -> AppResult<MemberResponse> {
        let mut member = self.find_verified_member(email).await?;

        if !member.apply_patch(MemberPatch::from(patch)) {
            log::debug!("회원 정보 변경 없음: {}", email);
            return Ok(MemberResponse::from(member));
        }

        let updated = self.member_repo.update(member).await?;
        log::info!("회원 정보 수정: {}", email);

        Ok(MemberResponse::from(updated))
    }

    /// 이메일과 비밀번호를 확인하고 회원 엔티티를 반환합니다.
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 에러로 응답합니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<Member> {
        let member = self.member_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                log::warn!("로그인 실패 (미가입): {}", email);
                invalid_credentials()
            })?;

        let is_valid = bcrypt::verify(password, &member.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(invalid_credentials());
        }

        Ok(member)
    }
}

#[async_trait]
impl Service for MemberService {
    fn name(&self) -> &str {
        "member"
    }
}
