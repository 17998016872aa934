use crate::{
    database::{self, MongoDB},
    error::ServiceError,
    models::{JobAnalysis, JobAnalysisView, MessageResponse},
};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::Deserialize;

/// Body of POST /api/v1/jobs/analyses. The owner is taken from the
/// authenticated identity, never from the payload.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysisRequest {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub extracted_role: String,
    pub extracted_domain: String,
    #[serde(default)]
    pub key_requirements: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

// No explicit sort: insertion order is whatever the store returns.
pub async fn list_analyses(
    db: &MongoDB,
    user_id: &str,
) -> Result<Vec<JobAnalysisView>, ServiceError> {
    let collection = db.collection::<JobAnalysis>(database::JOB_ANALYSES);

    let mut cursor = collection.find(doc! { "user_id": user_id }).await?;

    let mut analyses = Vec::new();
    while let Some(analysis) = cursor.try_next().await? {
        analyses.push(JobAnalysisView::from(analysis));
    }

    Ok(analyses)
}

pub async fn create_analysis(
    db: &MongoDB,
    user_id: &str,
    request: CreateAnalysisRequest,
) -> Result<JobAnalysisView, ServiceError> {
    let collection = db.collection::<JobAnalysis>(database::JOB_ANALYSES);

    let new_analysis = JobAnalysis {
        id: None,
        job_title: request.job_title,
        company: request.company,
        job_description: request.job_description,
        extracted_role: request.extracted_role,
        extracted_domain: request.extracted_domain,
        key_requirements: request.key_requirements,
        notes: request.notes,
        user_id: user_id.to_string(),
    };

    let result = collection.insert_one(&new_analysis).await?;

    let inserted_id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| ServiceError::Internal("Insert did not return an ObjectId".to_string()))?;

    // Read back so the view carries the generated id and timestamp
    let stored = collection
        .find_one(doc! { "_id": inserted_id })
        .await?
        .ok_or_else(|| ServiceError::Internal("Inserted analysis not found".to_string()))?;

    Ok(JobAnalysisView::from(stored))
}

// Filtering on both _id and user_id keeps one user from deleting another
// user's record: a mismatch on either field is the same NotFound.
pub async fn delete_analysis(
    db: &MongoDB,
    user_id: &str,
    analysis_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let collection = db.collection::<JobAnalysis>(database::JOB_ANALYSES);

    let oid = ObjectId::parse_str(analysis_id)
        .map_err(|_| ServiceError::NotFound("Job analysis not found".to_string()))?;

    let result = collection
        .delete_one(doc! { "_id": oid, "user_id": user_id })
        .await?;

    if result.deleted_count == 0 {
        return Err(ServiceError::NotFound("Job analysis not found".to_string()));
    }

    Ok(MessageResponse {
        success: true,
        message: "Job analysis deleted successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_missing_optionals() {
        let request: CreateAnalysisRequest = serde_json::from_value(serde_json::json!({
            "jobTitle": "Backend Engineer",
            "company": "Acme",
            "jobDescription": "Build services",
            "extractedRole": "Engineer",
            "extractedDomain": "SaaS"
        }))
        .unwrap();

        assert!(request.key_requirements.is_empty());
        assert!(request.notes.is_none());
    }

    #[test]
    fn test_create_request_rejects_missing_title() {
        let result: Result<CreateAnalysisRequest, _> =
            serde_json::from_value(serde_json::json!({
                "company": "Acme",
                "jobDescription": "x",
                "extractedRole": "y",
                "extractedDomain": "z"
            }));

        assert!(result.is_err());
    }
}
