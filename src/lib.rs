//! # 도서·저자 REST API
//!
//! 저자(`/autores`)와 도서(`/livros`)의 CRUD를 제공하는 Axum 애플리케이션입니다.
//! 서버 실행 파일(`main.rs`)과 통합 테스트가 같은 `app()` 라우터를 사용합니다.
//!
//! 모듈 구성:
//! - `config`: 환경변수 기반 설정
//! - `db`: SQLite 쿼리 (영속성 계층)
//! - `error`: `AppError`와 HTTP 응답 변환
//! - `models`: 레코드와 요청 본문 구조체
//! - `openapi`: utoipa 기반 OpenAPI 문서
//! - `routes`: HTTP 핸들러와 공유 상태(`AppState`)

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod routes;

use axum::{routing::get, Router};
use routes::*;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 모든 라우트를 묶은 애플리케이션 라우터를 만듭니다.
///
/// 정적 경로(`/livros/busca`)는 Axum 라우터가 경로 변수(`/livros/{id}`)보다
/// 우선해서 매칭하므로 등록 순서와 무관합니다.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // 저자(Autor) CRUD API
        .route("/autores", get(list_autores).post(create_autor))
        .route(
            "/autores/{id}",
            get(get_autor).put(update_autor).delete(delete_autor),
        )
        // 도서(Livro) CRUD API
        .route("/livros", get(list_livros).post(create_livro))
        .route("/livros/busca", get(list_livros_por_editora))
        .route(
            "/livros/{id}",
            get(get_livro).put(update_livro).delete(delete_livro),
        )
        // API 문서
        .route("/api-docs", get(swagger_ui))
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
