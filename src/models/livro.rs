//! # 도서(Livro) 모델 정의
//!
//! 도서는 저자를 **참조하지 않고 내장(embedding)** 합니다.
//! 저장 시점의 `Autor` 값을 그대로 복사해 두므로, 이후 저자 레코드를 수정하거나
//! 삭제해도 이미 저장된 도서의 `autor`는 바뀌지 않습니다.
//!
//! ## 구조체 역할
//! - `Livro`: 저장된 도서 레코드 (응답용)
//! - `LivroRow`: `livros` 테이블 한 행. `autor` 컬럼은 JSON 문자열입니다.
//! - `AutorRef`: 요청에서 저자를 지정하는 두 가지 방법 (ID 또는 저자 객체)
//! - `CreateLivroRequest` / `NewLivro`: 생성 요청과 검증된 입력
//! - `UpdateLivroRequest` / `LivroChanges`: 수정 요청과 검증된 변경 사항
//! - `BuscaQuery`: `GET /livros/busca?editora=...` 쿼리 파라미터

use super::{
    double_option, double_whole_number, new_id, normalize_id, required_text, whole_number, Autor,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Livro {
    pub id: String,
    pub titulo: String,
    pub editora: Option<String>,
    /// 가격. 음수가 아니어야 하지만 강제하지 않습니다.
    pub preco: Option<f64>,
    /// 쪽수
    pub paginas: Option<i64>,
    /// 저장 시점의 저자 복사본
    pub autor: Option<Autor>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct LivroRow {
    pub id: String,
    pub titulo: String,
    pub editora: Option<String>,
    pub preco: Option<f64>,
    pub paginas: Option<i64>,
    pub autor: Option<String>,
}

impl TryFrom<LivroRow> for Livro {
    type Error = serde_json::Error;

    fn try_from(row: LivroRow) -> Result<Self, Self::Error> {
        let autor = row
            .autor
            .as_deref()
            .map(serde_json::from_str::<Autor>)
            .transpose()?;

        Ok(Livro {
            id: row.id,
            titulo: row.titulo,
            editora: row.editora,
            preco: row.preco,
            paginas: row.paginas,
            autor,
        })
    }
}

/// 내장 저자를 `livros.autor` 컬럼에 저장할 JSON 문자열로 변환합니다.
pub fn encode_autor(autor: Option<&Autor>) -> Result<Option<String>, serde_json::Error> {
    autor.map(serde_json::to_string).transpose()
}

/// 요청 본문에서 도서의 저자를 지정하는 방법
///
/// - 문자열: 기존 저자의 ID. 서버가 조회해서 그 시점의 값을 복사합니다.
/// - 객체: 저자 값 자체. `id`가 없으면 새로 생성합니다.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AutorRef {
    Id(String),
    Embedded(EmbeddedAutor),
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmbeddedAutor {
    pub id: Option<String>,
    #[schema(value_type = String)]
    pub nome: Option<String>,
    pub nacionalidade: Option<String>,
}

impl EmbeddedAutor {
    /// 구조적으로 올바른 저자 값인지 검사하고 `Autor`로 변환합니다.
    pub fn into_autor(self) -> Result<Autor, AppError> {
        let id = match self.id {
            Some(raw) => normalize_id(&raw).map_err(|_| {
                AppError::Validation(format!("'autor.id' is not a valid identifier: {raw}"))
            })?,
            None => new_id(),
        };

        Ok(Autor {
            id,
            nome: required_text(self.nome, "autor.nome")?,
            nacionalidade: self.nacionalidade,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLivroRequest {
    #[schema(value_type = String)]
    pub titulo: Option<String>,
    pub editora: Option<String>,
    pub preco: Option<f64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub paginas: Option<i64>,
    pub autor: Option<AutorRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLivro {
    pub titulo: String,
    pub editora: Option<String>,
    pub preco: Option<f64>,
    pub paginas: Option<i64>,
    pub autor: Option<Autor>,
}

impl CreateLivroRequest {
    /// 필드를 검증하고, 저자 참조는 따로 분리해서 돌려줍니다.
    ///
    /// ID로 지정된 저자는 DB 조회가 필요하므로 핸들러가 해석한 뒤
    /// `NewLivro::autor`에 채워 넣습니다.
    pub fn validate(self) -> Result<(NewLivro, Option<AutorRef>), AppError> {
        let novo = NewLivro {
            titulo: required_text(self.titulo, "titulo")?,
            editora: self.editora,
            preco: self.preco,
            paginas: self.paginas,
            autor: None,
        };
        Ok((novo, self.autor))
    }
}

/// 도서 수정 요청
///
/// `UpdateAutorRequest`와 같은 규칙: 누락 = 유지, `null` = 비우기, 값 = 교체
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLivroRequest {
    pub titulo: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub editora: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub preco: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_whole_number")]
    #[schema(value_type = Option<i64>)]
    pub paginas: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<AutorRef>)]
    pub autor: Option<Option<AutorRef>>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LivroChanges {
    pub titulo: Option<String>,
    pub editora: Option<Option<String>>,
    pub preco: Option<Option<f64>>,
    pub paginas: Option<Option<i64>>,
    pub autor: Option<Option<Autor>>,
}

impl UpdateLivroRequest {
    pub fn validate(self) -> Result<(LivroChanges, Option<Option<AutorRef>>), AppError> {
        let titulo = match self.titulo {
            Some(titulo) => Some(required_text(Some(titulo), "titulo")?),
            None => None,
        };

        let changes = LivroChanges {
            titulo,
            editora: self.editora,
            preco: self.preco,
            paginas: self.paginas,
            autor: None,
        };
        Ok((changes, self.autor))
    }
}

impl LivroChanges {
    pub fn apply_to(self, livro: &mut Livro) {
        if let Some(titulo) = self.titulo {
            livro.titulo = titulo;
        }
        if let Some(editora) = self.editora {
            livro.editora = editora;
        }
        if let Some(preco) = self.preco {
            livro.preco = preco;
        }
        if let Some(paginas) = self.paginas {
            livro.paginas = paginas;
        }
        if let Some(autor) = self.autor {
            livro.autor = autor;
        }
    }
}

/// 출판사 검색 쿼리 파라미터
///
/// 누락 여부를 핸들러에서 직접 검사하기 위해 `Option`으로 받습니다.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BuscaQuery {
    /// 출판사 이름 (대소문자를 구분하는 정확히 일치 검색)
    #[param(required = true, value_type = String)]
    pub editora: Option<String>,
}
