//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `autor`: 저자(Autor) 레코드와 요청 본문
//! - `livro`: 도서(Livro) 레코드, 내장 저자 참조, 요청 본문과 검색 쿼리
//!
//! JSON 필드 이름은 API 계약에 맞춰 포르투갈어(`nome`, `titulo` 등)를 그대로 사용합니다.

pub mod autor;
pub mod livro;

pub use autor::*;
pub use livro::*;

use crate::error::AppError;
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// DELETE 성공 시 반환하는 확인 메시지
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 새 레코드 ID를 생성합니다. UUIDv7은 생성 순서대로 정렬됩니다.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// URL 경로의 ID를 검증하고 저장소가 쓰는 정규 형식(소문자 하이픈 형식)으로 바꿉니다.
///
/// UUID로 해석할 수 없으면 `AppError::InvalidId`를 반환합니다.
pub fn normalize_id(raw: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// 필수 문자열 필드를 검사합니다. 누락되었거나 공백뿐이면 검증 에러입니다.
pub(crate) fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::Validation(format!("'{field}' is required"))),
    }
}

/// 수정 요청에서 "필드 누락"과 "null"을 구분하기 위한 역직렬화 함수
///
/// `#[serde(default, deserialize_with = "double_option")]`와 함께 사용합니다.
/// - 필드 누락 → `None` (변경 안 함)
/// - `null` → `Some(None)` (값 비우기)
/// - 값 → `Some(Some(v))`
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 정수 필드(`paginas`)를 읽습니다. `256.0`처럼 소수부가 0인 실수도 받습니다.
///
/// `#[serde(default, deserialize_with = "whole_number")]`와 함께 사용합니다.
pub(crate) fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<serde_json::Number>::deserialize(deserializer)?
        .map(|n| number_to_i64(&n).map_err(de::Error::custom))
        .transpose()
}

/// `whole_number`의 수정 요청용 버전 (누락 / `null` / 값 구분)
pub(crate) fn double_whole_number<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(deserializer).map(Some)
}

fn number_to_i64(n: &serde_json::Number) -> Result<i64, String> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(format!("expected a whole number, got {n}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_id_accepts_uppercase_and_rejects_garbage() {
        let id = new_id();
        assert_eq!(normalize_id(&id.to_uppercase()).unwrap(), id);

        let err = normalize_id("60c72b2f9b1e8b3dfc8e7cdd").unwrap_err();
        assert!(matches!(err, AppError::InvalidId(_)));
    }

    #[test]
    fn number_to_i64_accepts_integral_floats_only() {
        let whole: serde_json::Number = serde_json::from_str("256.0").unwrap();
        let fraction: serde_json::Number = serde_json::from_str("256.5").unwrap();
        let integer: serde_json::Number = serde_json::from_str("256").unwrap();

        assert_eq!(number_to_i64(&whole).unwrap(), 256);
        assert_eq!(number_to_i64(&integer).unwrap(), 256);
        assert!(number_to_i64(&fraction).is_err());
    }

    #[test]
    fn required_text_rejects_missing_and_blank() {
        assert!(required_text(None, "nome").is_err());
        assert!(required_text(Some("   ".to_string()), "nome").is_err());
        assert_eq!(
            required_text(Some("Machado".to_string()), "nome").unwrap(),
            "Machado"
        );
    }
}
