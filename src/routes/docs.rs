//! # API 문서 핸들러
//!
//! - `GET /api-docs` → Swagger UI HTML 페이지
//! - `GET /api-docs/openapi.json` → `ApiDoc`에서 생성한 OpenAPI 문서
//!
//! Swagger UI 정적 자원은 CDN에서 불러오고, 이 서버는 문서 JSON만 제공합니다.

use crate::openapi::ApiDoc;
use axum::{response::Html, Json};
use utoipa::OpenApi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>API de Livros e Autores</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "/api-docs/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

/// `GET /api-docs` — Swagger UI 페이지
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// `GET /api-docs/openapi.json` — OpenAPI 3 문서
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
