use actix_web::{web, HttpResponse};

use crate::{
    database::MongoDB,
    services::user_service::{self, UpsertUserRequest, UpsertUserResponse},
    services::token_service::Claims,
};

#[utoipa::path(
    put,
    path = "/user/{email}",
    tag = "Users",
    request_body = UpsertUserRequest,
    params(
        ("email" = String, Path, description = "Email the profile is keyed by")
    ),
    responses(
        (status = 200, description = "Profile upserted, fresh access token issued", body = UpsertUserResponse)
    )
)]
pub async fn upsert_user(
    db: web::Data<MongoDB>,
    email: web::Path<String>,
    request: web::Json<UpsertUserRequest>,
) -> HttpResponse {
    log::info!("📝 PUT /user/{}", email);

    match user_service::upsert_user(&db, &email, &request).await {
        Ok(response) => {
            log::info!("✅ User upserted: {}", email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Failed to upsert user {}: {}", email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// PUT /user/admin/{email} - promote a user. The caller must already be an
/// admin; the check runs here against the users collection rather than as a
/// route gate.
pub async fn promote_admin(
    db: web::Data<MongoDB>,
    requester: web::ReqData<Claims>,
    email: web::Path<String>,
) -> HttpResponse {
    log::info!("👑 PUT /user/admin/{} - requested by {}", email, requester.email);

    match user_service::is_admin(&db, &requester.email).await {
        Ok(true) => match user_service::set_admin_role(&db, &email).await {
            Ok(()) => {
                log::info!("✅ {} promoted to admin", email);
                HttpResponse::Ok().json(serde_json::json!({ "success": true }))
            }
            Err(e) => {
                log::error!("❌ Failed to promote {}: {}", email, e);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "success": false,
                    "error": e
                }))
            }
        },
        Ok(false) => {
            log::warn!("⚠️ {} is not an admin", requester.email);
            HttpResponse::Forbidden().json(serde_json::json!({ "message": "Forbidden access" }))
        }
        Err(e) => {
            log::error!("❌ Admin check failed for {}: {}", requester.email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email to check")
    ),
    responses(
        (status = 200, description = "Whether the email holds the admin role")
    )
)]
pub async fn check_admin(db: web::Data<MongoDB>, email: web::Path<String>) -> HttpResponse {
    log::info!("🔎 GET /admin/{}", email);

    match user_service::is_admin(&db, &email).await {
        Ok(admin) => HttpResponse::Ok().json(serde_json::json!({ "admin": admin })),
        Err(e) => {
            log::error!("❌ Admin lookup failed for {}: {}", email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

pub async fn list_users(db: web::Data<MongoDB>, caller: web::ReqData<Claims>) -> HttpResponse {
    log::info!("📋 GET /user - requested by {}", caller.email);

    match user_service::list_users(&db).await {
        Ok(response) => {
            log::info!("✅ Listed {} users", response.count);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
