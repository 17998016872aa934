use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{
    database::MongoDB,
    services::auth_service::Claims,
    services::job_service::{self, CreateAnalysisRequest},
};

#[utoipa::path(
    get,
    path = "/api/v1/jobs/analyses",
    tag = "Jobs",
    responses(
        (status = 200, description = "Job analyses for the current user", body = [crate::models::JobAnalysisView]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_analyses(user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> impl Responder {
    let user_id = &user.sub;

    log::info!("📋 GET /jobs/analyses - user {}", user_id);

    match job_service::list_analyses(&db, user_id).await {
        Ok(analyses) => {
            log::info!("✅ Listed {} analyses for {}", analyses.len(), user_id);
            HttpResponse::Ok().json(analyses)
        }
        Err(e) => {
            log::error!("❌ Analysis listing failed for {}: {}", user_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/jobs/analyses",
    tag = "Jobs",
    request_body = CreateAnalysisRequest,
    responses(
        (status = 201, description = "Analysis created", body = crate::models::JobAnalysisView),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_analysis(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    request: web::Json<CreateAnalysisRequest>,
) -> impl Responder {
    let user_id = &user.sub;

    log::info!("📝 POST /jobs/analyses - user {}", user_id);

    match job_service::create_analysis(&db, user_id, request.into_inner()).await {
        Ok(analysis) => {
            log::info!("✅ Analysis created: {}", analysis.id);
            HttpResponse::Created().json(analysis)
        }
        Err(e) => {
            log::error!("❌ Analysis creation failed for {}: {}", user_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/jobs/analyses/{analysis_id}",
    tag = "Jobs",
    params(
        ("analysis_id" = String, Path, description = "Analysis id")
    ),
    responses(
        (status = 200, description = "Analysis deleted", body = crate::models::MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Analysis not found for this user")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_analysis(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    analysis_id: web::Path<String>,
) -> impl Responder {
    let user_id = &user.sub;

    log::info!("🗑️  DELETE /jobs/analyses/{} - user {}", analysis_id, user_id);

    match job_service::delete_analysis(&db, user_id, &analysis_id).await {
        Ok(response) => {
            log::info!("✅ Analysis deleted: {}", analysis_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Analysis delete failed: {} - {}", analysis_id, e);
            e.error_response()
        }
    }
}
