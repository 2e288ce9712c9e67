//! # Authentication Configuration Module
//!
//! JWT 액세스/리프레시 토큰 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_MINUTES="30"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```

use std::env;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "book-village-secret-key".to_string()
            })
    }

    pub fn expiration_minutes() -> i64 {
        env::var("JWT_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&m: &i64| m > 0)
            .unwrap_or(30)
    }

    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&d: &i64| d > 0)
            .unwrap_or(7)
    }
}

/// 토큰 서비스가 사용하는 JWT 설정 스냅샷
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_expiration_minutes: i64,
    pub refresh_expiration_days: i64,
}

impl JwtSettings {
    pub fn from_env() -> Self {
        Self {
            secret: JwtConfig::secret(),
            access_expiration_minutes: JwtConfig::expiration_minutes(),
            refresh_expiration_days: JwtConfig::refresh_expiration_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        if env::var("JWT_EXPIRATION_MINUTES").is_err() {
            assert_eq!(JwtConfig::expiration_minutes(), 30);
        }
        if env::var("JWT_REFRESH_EXPIRATION_DAYS").is_err() {
            assert_eq!(JwtConfig::refresh_expiration_days(), 7);
        }
    }

    #[test]
    fn test_settings_snapshot_matches_config() {
        let settings = JwtSettings::from_env();

        assert_eq!(settings.secret, JwtConfig::secret());
        assert!(settings.access_expiration_minutes > 0);
        assert!(settings.refresh_expiration_days > 0);
    }
}
