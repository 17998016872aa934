mod api;
mod database;
mod error;
mod middleware;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    log::info!("🚀 Starting Resume Service...");

    // Initialize MongoDB connection (pool options, connectivity probe, indexes)
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
            .allowed_origin(&frontend_url)
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:3000")
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check & metrics
            .route("/health", web::get().to(api::health::health_check))
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Auth endpoints (signup/login public, /me requires JWT)
            .service(
                web::scope("/api/v1/auth")
                    .route("/signup", web::post().to(api::auth::signup))
                    .route("/login", web::post().to(api::auth::login))
                    .service(
                        web::resource("/me")
                            .wrap(middleware::auth::AuthMiddleware)
                            .route(web::get().to(api::auth::get_me)),
                    ),
            )
            // Master resume: one document per user
            .service(
                web::scope("/api/v1/resumes")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("/master", web::get().to(api::resumes::get_master_resume))
                    .route("/master", web::post().to(api::resumes::save_master_resume)),
            )
            // Job analyses: per-user records
            .service(
                web::scope("/api/v1/jobs")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("/analyses", web::get().to(api::jobs::list_analyses))
                    .route("/analyses", web::post().to(api::jobs::create_analysis))
                    .route(
                        "/analyses/{analysis_id}",
                        web::delete().to(api::jobs::delete_analysis),
                    ),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await?;

    log::info!("🛑 Server stopped, closing MongoDB connection");
    db.client().clone().shutdown().await;

    Ok(())
}
