//! # 도서·저자 API 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 연결 풀 생성 및 마이그레이션 실행
//! 4. 라우터 구성 (연결 풀을 AppState로 주입)
//! 5. HTTP 서버 시작

use anyhow::Result;
use livraria::{app, config::Config, db, routes::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다
    dotenvy::dotenv().ok();

    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "livraria=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("Starting livraria server on {}", config.addr());

    // 연결 풀은 여기서 한 번만 만들어지고, 이후 AppState를 통해서만 공유됩니다
    let pool = db::connect(&config.database_url, config.max_connections).await?;
    tracing::info!("Database connection established: {}", config.database_url);

    let app = app(AppState::new(pool));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("API docs available at http://{}/api-docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
