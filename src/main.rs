mod api;
mod database;
mod middleware;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{guard, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use middleware::{AdminMiddleware, AuthMiddleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Clinic Portal Service...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000") // Portal frontend
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Public endpoints
            .route("/", web::get().to(api::health::greeting))
            .route("/health", web::get().to(api::health::health_check))
            .route("/services", web::get().to(api::services::list_services))
            .route("/available", web::get().to(api::availability::get_available))
            .route("/admin/{email}", web::get().to(api::users::check_admin))
            // Users: upsert is open (it issues the token), the rest needs identity
            .service(
                web::scope("/user")
                    .service(
                        web::resource("/admin/{email}")
                            .wrap(AuthMiddleware)
                            .route(web::put().to(api::users::promote_admin)),
                    )
                    .service(
                        web::resource("")
                            .wrap(AuthMiddleware)
                            .route(web::get().to(api::users::list_users)),
                    )
                    .route("/{email}", web::put().to(api::users::upsert_user)),
            )
            // Bookings: submission is open, reads need identity. The method
            // guards keep the open POST and the gated GET on the same path.
            .service(
                web::resource("/booking")
                    .guard(guard::Post())
                    .route(web::post().to(api::bookings::create_booking)),
            )
            .service(
                web::resource("/booking")
                    .guard(guard::Get())
                    .wrap(AuthMiddleware)
                    .route(web::get().to(api::bookings::patient_bookings)),
            )
            .service(
                web::resource("/bookings/{id}")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(api::bookings::booking_by_id)),
            )
            // Doctors: listing needs identity, writes need the admin role
            .service(
                web::scope("/doctor")
                    .wrap(AuthMiddleware)
                    .service(
                        web::resource("")
                            .guard(guard::Get())
                            .route(web::get().to(api::doctors::list_doctors)),
                    )
                    .service(
                        web::resource("")
                            .guard(guard::Post())
                            .wrap(AdminMiddleware)
                            .route(web::post().to(api::doctors::add_doctor)),
                    )
                    .service(
                        web::resource("/{email}")
                            .wrap(AdminMiddleware)
                            .route(web::delete().to(api::doctors::delete_doctor)),
                    ),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
