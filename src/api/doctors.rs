use actix_web::{web, HttpResponse};

use crate::{
    database::MongoDB,
    models::Doctor,
    services::{doctor_service, token_service::Claims},
};

#[utoipa::path(
    post,
    path = "/doctor",
    tag = "Doctors",
    responses(
        (status = 200, description = "Doctor added"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_doctor(
    db: web::Data<MongoDB>,
    caller: web::ReqData<Claims>,
    doctor: web::Json<Doctor>,
) -> HttpResponse {
    log::info!("📝 POST /doctor - {} added by {}", doctor.email, caller.email);

    match doctor_service::add_doctor(&db, doctor.into_inner()).await {
        Ok(doctor) => {
            log::info!("✅ Doctor added: {}", doctor.email);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "doctor": doctor
            }))
        }
        Err(e) => {
            log::error!("❌ Error adding doctor: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/doctor",
    tag = "Doctors",
    responses(
        (status = 200, description = "All doctors")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_doctors(db: web::Data<MongoDB>, caller: web::ReqData<Claims>) -> HttpResponse {
    log::info!("📋 GET /doctor - requested by {}", caller.email);

    match doctor_service::list_doctors(&db).await {
        Ok(response) => {
            log::info!("✅ Listed {} doctors", response.count);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error listing doctors: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/doctor/{email}",
    tag = "Doctors",
    params(
        ("email" = String, Path, description = "Email of the doctor to remove")
    ),
    responses(
        (status = 200, description = "Doctor removed"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_doctor(
    db: web::Data<MongoDB>,
    caller: web::ReqData<Claims>,
    email: web::Path<String>,
) -> HttpResponse {
    log::info!("🗑️  DELETE /doctor/{} - requested by {}", email, caller.email);

    match doctor_service::delete_doctor(&db, &email).await {
        Ok(()) => {
            log::info!("✅ Doctor deleted: {}", email);
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(e) => {
            log::error!("❌ Error deleting doctor {}: {}", email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
