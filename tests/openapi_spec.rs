//! # OpenAPI 명세 테스트
//!
//! utoipa가 생성하는 문서에 모든 경로와 태그, 스키마가 들어 있는지 검증합니다.

use livraria::openapi::ApiDoc;
use utoipa::OpenApi;

#[test]
fn all_paths_are_documented() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

    // 11개 핸들러 + 헬스체크, 같은 경로에 여러 메서드가 있어 6개 경로
    assert_eq!(paths.len(), 6, "documented paths: {paths:?}");
    assert!(paths.contains(&"/autores"));
    assert!(paths.contains(&"/autores/{id}"));
    assert!(paths.contains(&"/livros"));
    assert!(paths.contains(&"/livros/{id}"));
    assert!(paths.contains(&"/livros/busca"));
    assert!(paths.contains(&"/health"));
}

#[test]
fn autores_and_livros_tags_are_present() {
    let doc = ApiDoc::openapi();
    let tags: Vec<&str> = doc
        .tags
        .as_ref()
        .expect("tags should exist")
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    assert!(tags.contains(&"Autores"));
    assert!(tags.contains(&"Livros"));
}

#[test]
fn record_and_error_schemas_are_registered() {
    let doc = ApiDoc::openapi();
    let components = doc.components.as_ref().expect("components should exist");

    for name in ["Autor", "Livro", "ErrorBody", "Confirmation"] {
        assert!(
            components.schemas.contains_key(name),
            "schema {name} should be registered"
        );
    }
}

#[test]
fn document_serializes_to_json() {
    let json = ApiDoc::openapi().to_pretty_json().unwrap();
    assert!(json.contains("API de Livros e Autores"));
}

#[test]
fn info_carries_title_version_and_contact() {
    let info = ApiDoc::openapi().info;
    assert_eq!(info.title, "API de Livros e Autores");
    assert_eq!(info.version, "1.0.0");

    let contact = info.contact.expect("contact should exist");
    assert_eq!(contact.name.as_deref(), Some("Gustavo Felippe Barbosa"));
    assert_eq!(contact.email.as_deref(), Some("gustavofelippeb5@gmail.com"));
}

#[test]
fn busca_documents_only_success_and_not_found() {
    let doc = ApiDoc::openapi();
    let busca = doc.paths.paths["/livros/busca"]
        .get
        .as_ref()
        .expect("GET /livros/busca should be documented");
    let statuses: Vec<&str> = busca.responses.responses.keys().map(|k| k.as_str()).collect();

    assert_eq!(statuses, vec!["200", "404"]);
}
