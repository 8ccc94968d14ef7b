use crate::models::HealthResponse;
use rocket::get;
use rocket::serde::json::Json;

pub const SERVICE_NAME: &str = "YouTube Comment Crawler API";

#[get("/health")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
