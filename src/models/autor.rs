//! # 저자(Autor) 모델 정의
//!
//! ## 구조체 역할
//! - `Autor`: 저장된 저자 레코드 (응답용, `autores` 테이블 한 행)
//! - `CreateAutorRequest`: `POST /autores` 요청 본문
//! - `NewAutor`: 검증을 통과한 생성 입력
//! - `UpdateAutorRequest`: `PUT /autores/{id}` 요청 본문

use super::{double_option, required_text};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 저자 엔티티
///
/// 도서(`Livro`)에 내장될 때도 같은 구조체를 값으로 복사해 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Autor {
    /// 저장소가 생성한 ID (UUIDv7 문자열). 한 번 부여되면 바뀌지 않습니다.
    pub id: String,
    /// 저자 이름 (필수)
    pub nome: String,
    /// 국적 (선택)
    pub nacionalidade: Option<String>,
}

/// 저자 생성 요청
///
/// `nome`을 `Option`으로 받는 이유: 필드가 빠졌을 때 역직렬화 단계에서 실패시키지 않고
/// `validate()`에서 `AppError::Validation`으로 일관되게 응답하기 위해서입니다.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAutorRequest {
    #[schema(value_type = String)]
    pub nome: Option<String>,
    pub nacionalidade: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAutor {
    pub nome: String,
    pub nacionalidade: Option<String>,
}

impl CreateAutorRequest {
    pub fn validate(self) -> Result<NewAutor, AppError> {
        Ok(NewAutor {
            nome: required_text(self.nome, "nome")?,
            nacionalidade: self.nacionalidade,
        })
    }
}

/// 저자 수정 요청
///
/// 요청에 포함된 필드만 교체합니다. 빠진 필드는 그대로 유지됩니다.
/// `nacionalidade: null`을 보내면 국적을 비웁니다.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAutorRequest {
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub nacionalidade: Option<Option<String>>,
}

impl UpdateAutorRequest {
    /// 변경 사항을 저자 레코드에 적용합니다.
    ///
    /// 검증이 먼저 끝나야 레코드를 건드리므로, 실패하면 `autor`는 변하지 않습니다.
    pub fn apply_to(self, autor: &mut Autor) -> Result<(), AppError> {
        let nome = match self.nome {
            Some(nome) => Some(required_text(Some(nome), "nome")?),
            None => None,
        };

        if let Some(nome) = nome {
            autor.nome = nome;
        }
        if let Some(nacionalidade) = self.nacionalidade {
            autor.nacionalidade = nacionalidade;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn machado() -> Autor {
        Autor {
            id: "0190a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b".to_string(),
            nome: "Machado de Assis".to_string(),
            nacionalidade: Some("Brasileira".to_string()),
        }
    }

    #[test]
    fn create_request_without_nome_is_a_validation_error() {
        let req: CreateAutorRequest =
            serde_json::from_value(serde_json::json!({ "nacionalidade": "Brasileira" })).unwrap();

        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn update_replaces_only_supplied_fields() {
        let mut autor = machado();
        let req: UpdateAutorRequest =
            serde_json::from_value(serde_json::json!({ "nome": "Joaquim Maria" })).unwrap();

        req.apply_to(&mut autor).unwrap();

        assert_eq!(
            autor,
            Autor {
                nome: "Joaquim Maria".to_string(),
                ..machado()
            }
        );
    }

    #[test]
    fn update_with_null_clears_nacionalidade() {
        let mut autor = machado();
        let req: UpdateAutorRequest =
            serde_json::from_value(serde_json::json!({ "nacionalidade": null })).unwrap();

        req.apply_to(&mut autor).unwrap();

        assert_eq!(autor.nacionalidade, None);
        assert_eq!(autor.nome, "Machado de Assis");
    }

    #[test]
    fn rejected_update_leaves_record_untouched() {
        let mut autor = machado();
        let req: UpdateAutorRequest = serde_json::from_value(serde_json::json!({
            "nome": "",
            "nacionalidade": "Portuguesa"
        }))
        .unwrap();

        assert!(req.apply_to(&mut autor).is_err());
        assert_eq!(autor, machado());
    }
}
