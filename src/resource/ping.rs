use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PingPong {
    pub result: String,
}

/// Deployment smoke check
pub async fn ping() -> Json<PingPong> {
    Json(PingPong {
        result: "CD Test Success!".to_string(),
    })
}
