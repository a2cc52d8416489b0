use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic Portal Service API",
        version = "1.0.0",
        description = "Booking-management backend for the clinic portal. \n\n**Authentication:** protected endpoints require a JWT Bearer token issued by PUT /user/{email}.\n\n**Features:**\n- User upsert with access token issuance\n- Admin role management\n- Treatment catalog and per-date slot availability\n- Appointment bookings with duplicate protection\n- Doctor directory (admin-managed)",
        contact(
            name = "Clinic Portal Team",
            email = "support@clinic-portal.com"
        )
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::upsert_user,
        crate::api::users::check_admin,

        // Catalog & availability
        crate::api::services::list_services,
        crate::api::availability::get_available,

        // Bookings
        crate::api::bookings::create_booking,
        crate::api::bookings::patient_bookings,

        // Doctors
        crate::api::doctors::add_doctor,
        crate::api::doctors::list_doctors,
        crate::api::doctors::delete_doctor,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::services::user_service::UpsertUserRequest,
            crate::services::user_service::UpsertUserResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint for monitoring service status."),
        (name = "Users", description = "User upsert, token issuance and admin role checks."),
        (name = "Services", description = "Treatment catalog endpoints."),
        (name = "Availability", description = "Per-date open slot computation over the catalog."),
        (name = "Bookings", description = "Appointment submission and patient booking queries."),
        (name = "Doctors", description = "Doctor directory. Writes require the admin role."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            );
        }
    }
}
