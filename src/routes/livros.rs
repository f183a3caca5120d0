//! # 도서 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /livros | `list_livros` | 전체 도서 목록 |
//! | GET | /livros/busca?editora= | `list_livros_por_editora` | 출판사로 검색 |
//! | GET | /livros/{id} | `get_livro` | 도서 조회 |
//! | POST | /livros | `create_livro` | 새 도서 등록 (201) |
//! | PUT | /livros/{id} | `update_livro` | 도서 수정 |
//! | DELETE | /livros/{id} | `delete_livro` | 도서 삭제 |
//!
//! ## 저자 지정
//! 요청 본문의 `autor`는 저자 객체 또는 기존 저자의 ID 문자열입니다.
//! ID가 오면 `autores`에서 조회한 값을 복사해 내장합니다.
//! 어느 쪽이든 저장되는 것은 복사본이라, 이후 저자 수정은 도서에 반영되지 않습니다.

use crate::{
    db,
    error::{AppError, ErrorBody},
    models::*,
    routes::{AppJson, AppPath, AppQuery, AppState},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

/// 요청의 저자 참조를 내장할 `Autor` 값으로 해석합니다.
///
/// 존재하지 않거나 형식이 잘못된 저자 ID는 검증 실패(`validation_error`)입니다.
async fn resolve_autor(pool: &SqlitePool, autor: AutorRef) -> Result<Autor, AppError> {
    match autor {
        AutorRef::Id(raw) => {
            let id = normalize_id(&raw).map_err(|_| {
                AppError::Validation(format!("'autor' is not a valid identifier: {raw}"))
            })?;
            db::get_autor(pool, &id)
                .await?
                .ok_or_else(|| AppError::Validation(format!("autor '{id}' does not exist")))
        }
        AutorRef::Embedded(embedded) => embedded.into_autor(),
    }
}

#[utoipa::path(
    get,
    path = "/livros",
    tag = "Livros",
    responses(
        (status = 200, description = "Lista de livros", body = Vec<Livro>),
        (status = 500, description = "Erro no banco de dados", body = ErrorBody)
    )
)]
pub async fn list_livros(State(state): State<AppState>) -> Result<Json<Vec<Livro>>, AppError> {
    let livros = db::list_livros(&state.pool).await?;
    Ok(Json(livros))
}

#[utoipa::path(
    get,
    path = "/livros/{id}",
    tag = "Livros",
    params(("id" = String, Path, description = "ID do livro")),
    responses(
        (status = 200, description = "Livro encontrado", body = Livro),
        (status = 404, description = "Livro não encontrado", body = ErrorBody)
    )
)]
pub async fn get_livro(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Livro>, AppError> {
    let id = normalize_id(&id)?;
    let livro = db::get_livro(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(livro))
}

/// 출판사 이름이 정확히 일치하는 도서 목록을 반환합니다.
///
/// `editora` 파라미터가 없거나 비어 있으면 일치하는 도서가 없는 것과 같아 404입니다.
#[utoipa::path(
    get,
    path = "/livros/busca",
    tag = "Livros",
    params(BuscaQuery),
    responses(
        (status = 200, description = "Lista de livros filtrados", body = Vec<Livro>),
        (status = 404, description = "Nenhum livro encontrado", body = ErrorBody)
    )
)]
pub async fn list_livros_por_editora(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BuscaQuery>,
) -> Result<Json<Vec<Livro>>, AppError> {
    let editora = match query.editora {
        Some(editora) if !editora.trim().is_empty() => editora,
        _ => return Err(AppError::NotFound),
    };

    let livros = db::list_livros_por_editora(&state.pool, &editora).await?;
    if livros.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(Json(livros))
}

#[utoipa::path(
    post,
    path = "/livros",
    tag = "Livros",
    request_body = CreateLivroRequest,
    responses(
        (status = 201, description = "Livro cadastrado com sucesso", body = Livro),
        (status = 400, description = "Corpo JSON inválido", body = ErrorBody),
        (status = 500, description = "Erro ao cadastrar livro", body = ErrorBody)
    )
)]
pub async fn create_livro(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateLivroRequest>,
) -> Result<(StatusCode, Json<Livro>), AppError> {
    let (mut novo, autor) = req.validate()?;
    if let Some(autor) = autor {
        novo.autor = Some(resolve_autor(&state.pool, autor).await?);
    }

    let livro = db::create_livro(&state.pool, &novo).await?;
    tracing::info!(livro_id = %livro.id, "Livro created");
    Ok((StatusCode::CREATED, Json(livro)))
}

/// 도서 정보를 수정합니다. 본문에 있는 필드만 교체합니다.
///
/// `"autor": null`을 보내면 내장 저자를 제거합니다.
#[utoipa::path(
    put,
    path = "/livros/{id}",
    tag = "Livros",
    params(("id" = String, Path, description = "ID do livro")),
    request_body = UpdateLivroRequest,
    responses(
        (status = 200, description = "Livro atualizado com sucesso", body = Livro),
        (status = 404, description = "Livro não encontrado", body = ErrorBody),
        (status = 500, description = "Dados inválidos", body = ErrorBody)
    )
)]
pub async fn update_livro(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(req): AppJson<UpdateLivroRequest>,
) -> Result<Json<Livro>, AppError> {
    let id = normalize_id(&id)?;
    let mut livro = db::get_livro(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    let (mut changes, autor) = req.validate()?;
    changes.autor = match autor {
        None => None,
        Some(None) => Some(None),
        Some(Some(autor)) => Some(Some(resolve_autor(&state.pool, autor).await?)),
    };
    changes.apply_to(&mut livro);

    let livro = db::update_livro(&state.pool, &livro)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::debug!(livro_id = %livro.id, "Livro updated");
    Ok(Json(livro))
}

#[utoipa::path(
    delete,
    path = "/livros/{id}",
    tag = "Livros",
    params(("id" = String, Path, description = "ID do livro")),
    responses(
        (status = 200, description = "Livro excluído com sucesso", body = Confirmation),
        (status = 404, description = "Livro não encontrado", body = ErrorBody)
    )
)]
pub async fn delete_livro(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Confirmation>, AppError> {
    let id = normalize_id(&id)?;
    if !db::delete_livro(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(livro_id = %id, "Livro deleted");
    Ok(Json(Confirmation::new("Livro excluído com sucesso")))
}
