//! # 저자 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /autores | `list_autores` | 전체 저자 목록 |
//! | GET | /autores/{id} | `get_autor` | 저자 조회 |
//! | POST | /autores | `create_autor` | 새 저자 등록 (201) |
//! | PUT | /autores/{id} | `update_autor` | 저자 수정 |
//! | DELETE | /autores/{id} | `delete_autor` | 저자 삭제 |
//!
//! 각 핸들러는 요청 하나에 저장소 호출 하나(수정은 조회 + 쓰기)만 수행하며,
//! 요청 간에 공유하는 상태는 연결 풀뿐입니다.

use crate::{
    db,
    error::{AppError, ErrorBody},
    models::*,
    routes::{AppJson, AppPath, AppState},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

/// 전체 저자 목록을 조회합니다. 저자가 없으면 빈 배열을 반환합니다.
#[utoipa::path(
    get,
    path = "/autores",
    tag = "Autores",
    responses(
        (status = 200, description = "Lista de autores", body = Vec<Autor>),
        (status = 500, description = "Erro no banco de dados", body = ErrorBody)
    )
)]
pub async fn list_autores(State(state): State<AppState>) -> Result<Json<Vec<Autor>>, AppError> {
    let autores = db::list_autores(&state.pool).await?;
    Ok(Json(autores))
}

/// ID로 저자를 조회합니다.
///
/// ID 형식이 잘못되었거나 레코드가 없으면 404입니다.
#[utoipa::path(
    get,
    path = "/autores/{id}",
    tag = "Autores",
    params(("id" = String, Path, description = "ID do autor")),
    responses(
        (status = 200, description = "Autor encontrado", body = Autor),
        (status = 404, description = "Autor não encontrado", body = ErrorBody)
    )
)]
pub async fn get_autor(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Autor>, AppError> {
    let id = normalize_id(&id)?;
    let autor = db::get_autor(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(autor))
}

/// 새 저자를 등록합니다.
///
/// `nome`이 없거나 비어 있으면 500(`validation_error`), 저장 실패도 500입니다.
#[utoipa::path(
    post,
    path = "/autores",
    tag = "Autores",
    request_body = CreateAutorRequest,
    responses(
        (status = 201, description = "Autor cadastrado com sucesso", body = Autor),
        (status = 400, description = "Corpo JSON inválido", body = ErrorBody),
        (status = 500, description = "Erro ao cadastrar autor", body = ErrorBody)
    )
)]
pub async fn create_autor(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateAutorRequest>,
) -> Result<(StatusCode, Json<Autor>), AppError> {
    let novo = req.validate()?;
    let autor = db::create_autor(&state.pool, &novo).await?;
    tracing::info!(autor_id = %autor.id, "Autor created");
    Ok((StatusCode::CREATED, Json(autor)))
}

/// 저자 정보를 수정합니다.
///
/// 본문에 있는 필드만 교체합니다. 같은 요청을 반복해도 결과 상태는 같습니다.
#[utoipa::path(
    put,
    path = "/autores/{id}",
    tag = "Autores",
    params(("id" = String, Path, description = "ID do autor")),
    request_body = UpdateAutorRequest,
    responses(
        (status = 200, description = "Autor atualizado com sucesso", body = Autor),
        (status = 404, description = "Autor não encontrado", body = ErrorBody),
        (status = 500, description = "Dados inválidos", body = ErrorBody)
    )
)]
pub async fn update_autor(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(req): AppJson<UpdateAutorRequest>,
) -> Result<Json<Autor>, AppError> {
    let id = normalize_id(&id)?;
    let mut autor = db::get_autor(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    req.apply_to(&mut autor)?;

    // 조회와 쓰기 사이에 삭제되었으면 여기서 None이 됩니다
    let autor = db::update_autor(&state.pool, &autor)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::debug!(autor_id = %autor.id, "Autor updated");
    Ok(Json(autor))
}

/// 저자를 삭제합니다.
///
/// 이미 삭제된 ID로 다시 호출하면 404입니다.
/// 이 저자를 내장한 도서들은 영향을 받지 않습니다.
#[utoipa::path(
    delete,
    path = "/autores/{id}",
    tag = "Autores",
    params(("id" = String, Path, description = "ID do autor")),
    responses(
        (status = 200, description = "Autor excluído com sucesso", body = Confirmation),
        (status = 404, description = "Autor não encontrado", body = ErrorBody)
    )
)]
pub async fn delete_autor(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Confirmation>, AppError> {
    let id = normalize_id(&id)?;
    if !db::delete_autor(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(autor_id = %id, "Autor deleted");
    Ok(Json(Confirmation::new("Autor excluído com sucesso")))
}
