//! # 도서 데이터베이스 쿼리 모듈
//!
//! `livros` 테이블에 대한 CRUD 및 출판사 검색 쿼리입니다.
//!
//! 내장 저자(`autor`)는 JSON 문자열 컬럼으로 저장됩니다. 행을 읽을 때는
//! `LivroRow`로 받은 뒤 `Livro::try_from`으로 디코딩합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

const SELECT_LIVRO: &str = "SELECT id, titulo, editora, preco, paginas, autor FROM livros";

fn decode(rows: Vec<LivroRow>) -> Result<Vec<Livro>, AppError> {
    rows.into_iter()
        .map(|row| Livro::try_from(row).map_err(AppError::from))
        .collect()
}

pub async fn list_livros(pool: &SqlitePool) -> Result<Vec<Livro>, AppError> {
    let rows = sqlx::query_as::<_, LivroRow>(&format!("{SELECT_LIVRO} ORDER BY rowid"))
        .fetch_all(pool)
        .await?;

    decode(rows)
}

pub async fn get_livro(pool: &SqlitePool, id: &str) -> Result<Option<Livro>, AppError> {
    let row = sqlx::query_as::<_, LivroRow>(&format!("{SELECT_LIVRO} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    // Option<Result<..>> → Result<Option<..>>
    Ok(row.map(Livro::try_from).transpose()?)
}

/// 출판사 이름이 정확히 일치하는 도서를 조회합니다.
///
/// SQLite의 기본 TEXT 비교(BINARY)는 대소문자를 구분합니다.
/// "Editora X"와 "editora x"는 서로 다른 출판사로 취급됩니다.
pub async fn list_livros_por_editora(
    pool: &SqlitePool,
    editora: &str,
) -> Result<Vec<Livro>, AppError> {
    let rows =
        sqlx::query_as::<_, LivroRow>(&format!("{SELECT_LIVRO} WHERE editora = ? ORDER BY rowid"))
            .bind(editora)
            .fetch_all(pool)
            .await?;

    decode(rows)
}

/// 새 도서를 저장하고 저장된 레코드를 반환합니다.
///
/// `novo.autor`는 이미 해석이 끝난 저자 값이며, 그대로 JSON으로 복사되어 저장됩니다.
pub async fn create_livro(pool: &SqlitePool, novo: &NewLivro) -> Result<Livro, AppError> {
    let id = new_id();
    let autor = encode_autor(novo.autor.as_ref())?;

    sqlx::query(
        "INSERT INTO livros (id, titulo, editora, preco, paginas, autor) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&novo.titulo)
    .bind(&novo.editora)
    .bind(novo.preco)
    .bind(novo.paginas)
    .bind(autor)
    .execute(pool)
    .await?;

    get_livro(pool, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created livro".to_string()))
}

/// 도서 레코드의 변경 가능한 필드를 통째로 덮어씁니다.
///
/// ## 반환값
/// - `Ok(Some(Livro))`: 수정 성공
/// - `Ok(None)`: 해당 ID의 도서가 없음
pub async fn update_livro(pool: &SqlitePool, livro: &Livro) -> Result<Option<Livro>, AppError> {
    let autor = encode_autor(livro.autor.as_ref())?;

    let result = sqlx::query(
        "UPDATE livros SET titulo = ?, editora = ?, preco = ?, paginas = ?, autor = ? WHERE id = ?",
    )
    .bind(&livro.titulo)
    .bind(&livro.editora)
    .bind(livro.preco)
    .bind(livro.paginas)
    .bind(autor)
    .bind(&livro.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_livro(pool, &livro.id).await
}

pub async fn delete_livro(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM livros WHERE id = ?")
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

    fn novo(titulo: &str, editora: &str) -> NewLivro {
        NewLivro {
            titulo: titulo.to_string(),
            editora: Some(editora.to_string()),
            preco: Some(39.90),
            paginas: Some(256),
            autor: Some(Autor {
                id: new_id(),
                nome: "Machado de Assis".to_string(),
                nacionalidade: Some("Brasileira".to_string()),
            }),
        }
    }

    #[tokio::test]
    async fn created_book_keeps_its_embedded_author() {
        let pool = memory_pool().await;
        let input = novo("Dom Casmurro", "Editora X");

        let livro = create_livro(&pool, &input).await.unwrap();

        assert_eq!(livro.autor, input.autor);
        assert_eq!(get_livro(&pool, &livro.id).await.unwrap(), Some(livro));
    }

    #[tokio::test]
    async fn publisher_search_is_exact_and_case_sensitive() {
        let pool = memory_pool().await;
        let x = create_livro(&pool, &novo("Dom Casmurro", "Editora X")).await.unwrap();
        create_livro(&pool, &novo("Memórias Póstumas", "editora x")).await.unwrap();
        create_livro(&pool, &novo("Quincas Borba", "Editora XY")).await.unwrap();

        let found = list_livros_por_editora(&pool, "Editora X").await.unwrap();

        assert_eq!(found, vec![x]);
    }

    #[tokio::test]
    async fn book_without_author_is_stored_with_null_column() {
        let pool = memory_pool().await;
        let input = NewLivro {
            autor: None,
            ..novo("Sem Autor", "Editora X")
        };

        let livro = create_livro(&pool, &input).await.unwrap();
        assert_eq!(livro.autor, None);
    }
}
