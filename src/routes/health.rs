//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "ok" }`
//!
//! 로드밸런서나 컨테이너 오케스트레이터가 서버 가동 여부를 확인할 때 사용합니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — 서버 상태를 확인합니다.
///
/// State 등 추출자가 필요 없고, 실패하지 않는 가장 단순한 형태의 핸들러입니다.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Servidor em funcionamento"))
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
