//! # 저자 데이터베이스 쿼리 모듈
//!
//! `autores` 테이블에 대한 CRUD 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 모든 저자를 저장된 순서(rowid)대로 조회합니다.
pub async fn list_autores(pool: &SqlitePool) -> Result<Vec<Autor>, AppError> {
    let autores = sqlx::query_as::<_, Autor>(
        "SELECT id, nome, nacionalidade FROM autores ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    Ok(autores)
}

/// ID로 저자 하나를 조회합니다.
///
/// `fetch_optional`은 결과가 0행이면 None, 1행이면 Some(Autor)을 반환합니다.
pub async fn get_autor(pool: &SqlitePool, id: &str) -> Result<Option<Autor>, AppError> {
    let autor = sqlx::query_as::<_, Autor>(
        "SELECT id, nome, nacionalidade FROM autores WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(autor)
}

/// 새 저자를 저장하고 저장된 레코드를 반환합니다.
///
/// ## 처리 흐름
/// 1. UUIDv7으로 고유 ID 생성
/// 2. INSERT 쿼리로 DB에 저장
/// 3. 방금 저장한 레코드를 다시 조회하여 반환
pub async fn create_autor(pool: &SqlitePool, novo: &NewAutor) -> Result<Autor, AppError> {
    let id = new_id();

    sqlx::query("INSERT INTO autores (id, nome, nacionalidade) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(&novo.nome)
        .bind(&novo.nacionalidade) // None이면 SQL NULL
        .execute(pool)
        .await?;

    get_autor(pool, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created autor".to_string()))
}

/// 저자 레코드의 변경 가능한 필드를 통째로 덮어씁니다.
///
/// 어떤 필드를 바꿀지는 호출자가 `UpdateAutorRequest::apply_to`로 미리 계산합니다.
///
/// ## 반환값
/// - `Ok(Some(Autor))`: 수정 성공
/// - `Ok(None)`: 해당 ID의 저자가 없음 (404 처리는 핸들러에 위임)
pub async fn update_autor(pool: &SqlitePool, autor: &Autor) -> Result<Option<Autor>, AppError> {
    let result = sqlx::query("UPDATE autores SET nome = ?, nacionalidade = ? WHERE id = ?")
        .bind(&autor.nome)
        .bind(&autor.nacionalidade)
        .bind(&autor.id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_autor(pool, &autor.id).await
}

/// ID로 저자를 삭제합니다.
///
/// 이 저자를 내장한 도서들은 그대로 남습니다 (참조가 아니라 복사본이므로).
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID의 저자가 없어 삭제된 행이 없음
pub async fn delete_autor(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM autores WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_pool;
    use pretty_assertions::assert_eq;

    fn novo(nome: &str) -> NewAutor {
        NewAutor {
            nome: nome.to_string(),
            nacionalidade: Some("Brasileira".to_string()),
        }
    }

    #[tokio::test]
    async fn list_returns_authors_in_insertion_order() {
        let pool = memory_pool().await;
        assert!(list_autores(&pool).await.unwrap().is_empty());

        let machado = create_autor(&pool, &novo("Machado de Assis")).await.unwrap();
        let clarice = create_autor(&pool, &novo("Clarice Lispector")).await.unwrap();

        assert_eq!(list_autores(&pool).await.unwrap(), vec![machado, clarice]);
    }

    #[tokio::test]
    async fn update_of_missing_author_returns_none() {
        let pool = memory_pool().await;
        let ghost = Autor {
            id: new_id(),
            nome: "Ninguém".to_string(),
            nacionalidade: None,
        };

        assert_eq!(update_autor(&pool, &ghost).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let pool = memory_pool().await;
        let autor = create_autor(&pool, &novo("Machado de Assis")).await.unwrap();

        assert!(delete_autor(&pool, &autor.id).await.unwrap());
        assert!(!delete_autor(&pool, &autor.id).await.unwrap());
        assert_eq!(get_autor(&pool, &autor.id).await.unwrap(), None);
    }
}
