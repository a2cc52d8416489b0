use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    database::MongoDB,
    models::Booking,
    services::{booking_service, token_service::Claims},
};

#[derive(Debug, Deserialize)]
pub struct PatientBookingsQuery {
    #[serde(rename = "patientEmail")]
    pub patient_email: String,
}

#[utoipa::path(
    post,
    path = "/booking",
    tag = "Bookings",
    responses(
        (status = 200, description = "Booking recorded, or the existing record when the same appointment was already submitted")
    )
)]
pub async fn create_booking(db: web::Data<MongoDB>, booking: web::Json<Booking>) -> HttpResponse {
    log::info!(
        "📝 POST /booking - {} on {} at {}",
        booking.treatment,
        booking.date,
        booking.slot
    );

    match booking_service::submit_booking(&db, booking.into_inner()).await {
        Ok(response) => {
            if response.success {
                log::info!("✅ Booking created for {}", response.booking.patient_name);
            } else {
                log::warn!(
                    "⚠️ Duplicate booking for {} - returning existing record",
                    response.booking.patient_name
                );
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error creating booking: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/booking",
    tag = "Bookings",
    params(
        ("patientEmail" = String, Query, description = "Must match the caller's own email")
    ),
    responses(
        (status = 200, description = "The caller's bookings"),
        (status = 403, description = "Query email does not match the credential")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn patient_bookings(
    db: web::Data<MongoDB>,
    caller: web::ReqData<Claims>,
    query: web::Query<PatientBookingsQuery>,
) -> HttpResponse {
    log::info!("📋 GET /booking - patientEmail: {}", query.patient_email);

    // Patients can only read their own bookings
    if query.patient_email != caller.email {
        log::warn!(
            "⚠️ {} tried to read bookings of {}",
            caller.email,
            query.patient_email
        );
        return HttpResponse::Forbidden()
            .json(serde_json::json!({ "message": "Forbidden access" }));
    }

    match booking_service::bookings_by_patient(&db, &query.patient_email).await {
        Ok(response) => {
            log::info!("✅ Listed {} bookings", response.count);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error listing bookings: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

pub async fn booking_by_id(
    db: web::Data<MongoDB>,
    caller: web::ReqData<Claims>,
    id: web::Path<String>,
) -> HttpResponse {
    log::info!("🔎 GET /bookings/{} - requested by {}", id, caller.email);

    match booking_service::booking_by_id(&db, &id).await {
        Ok(Some(booking)) => HttpResponse::Ok().json(booking),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "error": format!("Booking {} not found", id)
        })),
        Err(e) => {
            log::error!("❌ Error fetching booking {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
