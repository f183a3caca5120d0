//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 기본값이 있어 환경변수 없이도 동작합니다):
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (기본값: "sqlite:data/livraria.db")
//! - `DB_MAX_CONNECTIONS`: 연결 풀 최대 연결 수 (기본값: 5)
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 3000)

use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/livraria.db";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `main`에서만 사용됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/livraria.db")
    pub database_url: String,
    /// 연결 풀 최대 연결 수
    pub max_connections: u32,
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
}

impl Config {
    /// 프로세스 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 만듭니다.
    ///
    /// 테스트에서 전역 환경변수를 건드리지 않고 설정 파싱을 검증할 수 있도록
    /// 조회 로직을 클로저로 분리했습니다.
    /// 숫자 값의 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config.database_url, "sqlite:data/livraria.db");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_MAX_CONNECTIONS", "1"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]);

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
