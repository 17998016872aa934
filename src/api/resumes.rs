use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{
    database::MongoDB,
    services::auth_service::Claims,
    services::resume_service::{self, SaveResumeRequest},
};

#[utoipa::path(
    get,
    path = "/api/v1/resumes/master",
    tag = "Resumes",
    responses(
        (status = 200, description = "Master resume", body = crate::models::MasterResumeView),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Master resume not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_master_resume(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let user_id = &user.sub;

    log::info!("📄 GET /resumes/master - user {}", user_id);

    match resume_service::get_master_resume(&db, user_id).await {
        Ok(resume) => HttpResponse::Ok().json(resume),
        Err(e) => {
            log::warn!("❌ Resume fetch failed for {}: {}", user_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/resumes/master",
    tag = "Resumes",
    request_body = SaveResumeRequest,
    responses(
        (status = 200, description = "Master resume saved", body = crate::models::MessageResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn save_master_resume(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    request: web::Json<SaveResumeRequest>,
) -> impl Responder {
    let user_id = &user.sub;

    log::info!("💾 POST /resumes/master - user {}", user_id);

    match resume_service::save_master_resume(&db, user_id, request.into_inner()).await {
        Ok(response) => {
            log::info!("✅ Master resume saved for {}", user_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Resume save failed for {}: {}", user_id, e);
            e.error_response()
        }
    }
}
