use crate::domain::dto::members::{MemberPatchDto, MemberResponse};
use crate::domain::entities::members::{Member, MemberPatch};
use super::to_utc;

impl From<MemberPatchDto> for MemberPatch {
    fn from(dto: MemberPatchDto) -> Self {
        let MemberPatchDto { name, display_name, phone_number, address, img_url } = dto;

        Self { name, display_name, phone_number, address, img_url }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        let Member {
            email,
            name,
            display_name,
            phone_number,
            address,
            img_url,
            roles,
            created_at,
            modified_at,
            ..
        } = member;

        Self {
            email,
            name,
            display_name,
            phone_number,
            address,
            img_url,
            roles,
            created_at: to_utc(created_at),
            modified_at: to_utc(modified_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_response_hides_password_hash() {
        let member = Member::new(
            "reader@bookvillage.com".to_string(),
            "$2b$04$hash".to_string(),
            "홍길동".to_string(),
            "책벌레".to_string(),
        );

        let json = serde_json::to_value(MemberResponse::from(member)).unwrap();

        assert_eq!(json["email"], "reader@bookvillage.com");
        assert_eq!(json["displayName"], "책벌레");
        assert_eq!(json["roles"], serde_json::json!(["USER"]));
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json["phoneNumber"].is_null());
    }

    #[test]
    fn test_patch_dto_maps_field_by_field() {
        let patch = MemberPatch::from(MemberPatchDto {
            display_name: Some("새닉네임".to_string()),
            img_url: Some("https://img.bookvillage.com/1.png".to_string()),
            ..Default::default()
        });

        assert_eq!(patch.display_name.as_deref(), Some("새닉네임"));
        assert_eq!(patch.img_url.as_deref(), Some("https://img.bookvillage.com/1.png"));
        assert!(patch.name.is_none());
    }
}
