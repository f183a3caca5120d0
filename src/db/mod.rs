//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//! 모든 함수는 `&SqlitePool`을 인자로 받습니다. 풀은 시작 시 한 번 만들어져
//! `AppState`를 통해 주입되며, 전역 상태로 두지 않습니다.
//!
//! 각 하위 모듈:
//! - `autores`: 저자 CRUD 쿼리
//! - `livros`: 도서 CRUD 및 출판사 검색 쿼리

pub mod autores;
pub mod livros;

pub use autores::*;
pub use livros::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// 연결 풀을 만들고 마이그레이션을 실행합니다.
///
/// 서버 시작(`main`)과 테스트가 같은 경로로 스키마를 준비합니다.
/// DB 파일이 없으면 새로 만들고, 상위 디렉토리도 함께 생성합니다.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // 메모리 DB(":memory:")는 상위 디렉토리가 없습니다
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
            tracing::info!("Created database directory: {}", parent.display());
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// 테스트마다 독립된 메모리 DB
    ///
    /// SQLite 메모리 DB는 연결마다 따로 존재하므로 연결을 하나로 제한합니다.
    pub async fn memory_pool() -> SqlitePool {
        connect("sqlite::memory:", 1).await.unwrap()
    }
}
