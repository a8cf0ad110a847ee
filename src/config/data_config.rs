//! 데이터 및 서버 설정 관리 모듈
//!
//! 환경, 서버, 데이터베이스 및 요청 보호 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use log::error;
use crate::db::MEMORY_URL;

/// 환경 변수를 파싱하고, 실패 시 에러 로그와 함께 기본값을 사용합니다.
fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_env("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        parse_env("WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 저장소 연결 URL
    ///
    /// 운영 환경에서는 `DATABASE_URL`이 반드시 설정되어야 하며,
    /// 그 외 환경에서는 인메모리 저장소가 기본값입니다.
    pub fn url() -> Result<String, String> {
        Self::url_for_env(env::var("DATABASE_URL").ok(), &Environment::current())
    }

    pub fn url_for_env(configured: Option<String>, environment: &Environment) -> Result<String, String> {
        match configured {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ if environment.is_production() => {
                Err("DATABASE_URL must be set in production".to_string())
            }
            _ => Ok(MEMORY_URL.to_string()),
        }
    }

    pub fn max_connections() -> u32 {
        parse_env("DATABASE_MAX_CONNECTIONS", 5)
    }

    /// 저장소 호출 1회에 허용되는 최대 시간
    pub fn query_timeout() -> Duration {
        Duration::from_millis(parse_env("QUERY_TIMEOUT_MS", 5000))
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn load() -> Self {
        Self {
            per_second: parse_env("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: &'static str =
        "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080";

    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| Self::DEFAULT_ORIGINS.to_string()),
        )
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
