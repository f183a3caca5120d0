//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `autores`: 저자 CRUD 핸들러
//! - `livros`: 도서 CRUD 및 출판사 검색 핸들러
//! - `docs`: OpenAPI 문서(JSON)와 Swagger UI 페이지
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod autores;
pub mod docs;
pub mod health;
pub mod livros;

pub use autores::*;
pub use docs::*;
pub use health::*;
pub use livros::*;

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 영속성 클라이언트(연결 풀)는 `main`에서 한 번 만들어 여기에 담아 주입합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// `axum::Json`과 같지만 파싱 실패를 `AppError`로 돌려주는 추출자
///
/// Axum 기본 `Json` 추출자는 실패 시 일반 텍스트 응답을 보냅니다.
/// 이 추출자를 쓰면 잘못된 본문에도 `{ "error": { ... } }` 형태로 응답합니다.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// 경로 파라미터 추출자. 실패 시(예: UTF-8이 아닌 `%FF`) JSON 에러 본문으로 응답합니다.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// 쿼리 문자열 추출자. 실패 시(예: 같은 파라미터 중복) JSON 에러 본문으로 응답합니다.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
