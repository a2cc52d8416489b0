use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{database::MongoDB, services::availability_service};

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}

#[utoipa::path(
    get,
    path = "/available",
    tag = "Availability",
    params(
        ("date" = String, Query, description = "Date key the portal groups bookings under")
    ),
    responses(
        (status = 200, description = "Per-service open slots for the date")
    )
)]
pub async fn get_available(
    db: web::Data<MongoDB>,
    query: web::Query<AvailabilityQuery>,
) -> HttpResponse {
    log::info!("📅 GET /available - date: {}", query.date);

    match availability_service::get_available_slots(&db, &query.date).await {
        Ok(response) => {
            log::info!("✅ Availability computed for {} services", response.count);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error computing availability: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
