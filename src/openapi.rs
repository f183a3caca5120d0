//! # OpenAPI 명세 정의
//!
//! utoipa로 핸들러 어노테이션(`#[utoipa::path]`)과 모델 타입에서 OpenAPI 문서를 생성합니다.
//! `ApiDoc::openapi()`로 문서를 얻을 수 있고, `/api-docs/openapi.json`에서 제공됩니다.

use utoipa::OpenApi;

use crate::{
    error::{ErrorBody, ErrorDetail},
    models::{
        Autor, AutorRef, Confirmation, CreateAutorRequest, CreateLivroRequest, EmbeddedAutor,
        Livro, UpdateAutorRequest, UpdateLivroRequest,
    },
    routes::{autores, health, livros},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Livros e Autores",
        version = "1.0.0",
        description = "API para gerenciamento de autores e livros",
        contact(name = "Gustavo Felippe Barbosa", email = "gustavofelippeb5@gmail.com")
    ),
    servers((url = "http://localhost:3000")),
    paths(
        // autores
        autores::list_autores,
        autores::get_autor,
        autores::create_autor,
        autores::update_autor,
        autores::delete_autor,
        // livros
        livros::list_livros,
        livros::get_livro,
        livros::list_livros_por_editora,
        livros::create_livro,
        livros::update_livro,
        livros::delete_livro,
        // health
        health::health_check,
    ),
    components(schemas(
        Autor,
        Livro,
        AutorRef,
        EmbeddedAutor,
        CreateAutorRequest,
        UpdateAutorRequest,
        CreateLivroRequest,
        UpdateLivroRequest,
        Confirmation,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "Autores", description = "Gerenciamento de autores"),
        (name = "Livros", description = "Gerenciamento de livros"),
        (name = "Health", description = "Verificação de saúde"),
    )
)]
pub struct ApiDoc;
