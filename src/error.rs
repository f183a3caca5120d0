//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 찾을 수 없음 / 잘못된 ID / 검증 실패 / 저장소 장애를
//!   서로 다른 variant로 구분합니다. 호출자와 테스트가 `match`로 판별할 수 있습니다.
//! - `IntoResponse` 구현: 에러를 HTTP 상태 코드 + JSON 본문으로 자동 변환
//! - `From<JsonRejection>` 등: 본문/경로/쿼리 파싱 실패도 같은 JSON 형태로 응답

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 레코드가 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// ID 형식이 저장소의 ID 형식(UUID)과 맞지 않음 (HTTP 404)
    ///
    /// 클라이언트 입장에서는 "없는 레코드"와 같으므로 상태 코드는 404이고,
    /// 에러 코드(`invalid_id`)로만 구분됩니다.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// 필수 필드 누락 등 저장 전에 거부된 입력 (HTTP 500)
    ///
    /// 저장소가 쓰기를 거부한 것과 같은 취급이라 상태 코드는 500이고,
    /// 에러 코드(`validation_error`)로 저장소 장애와 구분됩니다.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 요청 본문, 경로, 쿼리 문자열을 해석할 수 없음 (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx 함수의 에러에 `?`를 쓰면 자동으로 이 variant가 됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 도서에 내장된 저자 문서(JSON 컬럼)의 인코딩/디코딩 실패 (HTTP 500)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// 응답 본문의 `error.code`로 내려가는 기계 판별용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::InvalidId(_) => "invalid_id",
            AppError::Validation(_) => "validation_error",
            AppError::BadRequest(_) => "bad_request",
            AppError::Internal(_) | AppError::Serialization(_) => "internal_error",
            AppError::Database(_) => "database_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::InvalidId(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_)
            | AppError::Internal(_)
            | AppError::Database(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 에러 응답 본문: `{ "error": { "code": "...", "message": "..." } }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// 기계 판별용 에러 코드 (예: "not_found", "validation_error")
    pub code: String,
    /// 사람이 읽는 메시지
    pub message: String,
}

impl IntoResponse for AppError {
    /// 내부 에러(Database, Serialization, Internal)는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match self {
            AppError::NotFound | AppError::InvalidId(_) => self.to_string(),
            AppError::Validation(ref msg) | AppError::BadRequest(ref msg) => msg.clone(),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Serialization error: {}", e);
                "An internal error occurred".to_string()
            }
        };

        let body = Json(ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

// AppJson 추출자가 JSON 파싱에 실패하면 이 변환을 거쳐
// Axum 기본 텍스트 응답 대신 JSON 에러 본문이 내려갑니다.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
