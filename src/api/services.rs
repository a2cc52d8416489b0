use actix_web::{web, HttpResponse};

use crate::{database::MongoDB, services::catalog_service};

#[utoipa::path(
    get,
    path = "/services",
    tag = "Services",
    responses(
        (status = 200, description = "Treatment names, projected from the catalog")
    )
)]
pub async fn list_services(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /services");

    match catalog_service::list_service_names(&db).await {
        Ok(response) => {
            log::info!("✅ Listed {} services", response.count);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error listing services: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
