use actix_web::{web, HttpResponse, ResponseError};

use crate::database::MongoDB;
use crate::services::auth_service::{
    self, AuthResponse, Claims, LoginRequest, SignupRequest, SignupResponse,
};

#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    db: web::Data<MongoDB>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    log::info!("📝 POST /auth/signup - email: {}", request.email);

    match auth_service::signup(&db, &request).await {
        Ok(response) => {
            log::info!("✅ User created: {}", request.email);
            HttpResponse::Created().json(response)
        }
        Err(e) => {
            log::warn!("❌ Signup failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    db: web::Data<MongoDB>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /auth/login - email: {}", request.email);

    match auth_service::login(&db, &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current user", body = crate::models::UserInfo),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> HttpResponse {
    let user_id = &user.sub;

    log::info!("👤 GET /auth/me - user {}", user_id);

    match auth_service::get_current_user(&db, user_id).await {
        Ok(info) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "user": info
        })),
        Err(e) => {
            log::warn!("❌ Identity lookup failed for {}: {}", user_id, e);
            e.error_response()
        }
    }
}
