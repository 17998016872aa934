use crate::{
    database::{self, MongoDB},
    error::ServiceError,
    models::{Education, MasterResume, MasterResumeView, MessageResponse, WorkExperience},
};
use mongodb::bson::{doc, Document};
use serde::Deserialize;

/// Body of POST /api/v1/resumes/master. The owner is taken from the
/// authenticated identity, never from the payload.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeRequest {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub personal_info: Document,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

pub async fn get_master_resume(
    db: &MongoDB,
    user_id: &str,
) -> Result<MasterResumeView, ServiceError> {
    let collection = db.collection::<MasterResume>(database::MASTER_RESUMES);

    let resume = collection
        .find_one(doc! { "user_id": user_id })
        .await?
        .ok_or_else(|| ServiceError::NotFound("Master resume not found".to_string()))?;

    Ok(MasterResumeView::from(resume))
}

// Whole-document replace keyed on user_id: saving twice leaves only the
// second content, there are no partial updates.
pub async fn save_master_resume(
    db: &MongoDB,
    user_id: &str,
    request: SaveResumeRequest,
) -> Result<MessageResponse, ServiceError> {
    let collection = db.collection::<MasterResume>(database::MASTER_RESUMES);

    let resume = MasterResume {
        id: None,
        user_id: user_id.to_string(),
        personal_info: request.personal_info,
        work_experiences: request.work_experiences,
        education: request.education,
        skills: request.skills,
        certifications: request.certifications,
    };

    collection
        .replace_one(doc! { "user_id": user_id }, &resume)
        .upsert(true)
        .await?;

    Ok(MessageResponse {
        success: true,
        message: "Master resume saved successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_deserializes_with_defaults() {
        let request: SaveResumeRequest = serde_json::from_str("{}").unwrap();

        assert!(request.personal_info.is_empty());
        assert!(request.work_experiences.is_empty());
        assert!(request.education.is_empty());
        assert!(request.skills.is_empty());
        assert!(request.certifications.is_empty());
    }

    #[test]
    fn test_body_fields_are_camel_case() {
        let request: SaveResumeRequest = serde_json::from_value(serde_json::json!({
            "personalInfo": { "name": "Ana" },
            "skills": ["rust"],
            "workExperiences": [],
            "education": [],
            "certifications": ["AWS"]
        }))
        .unwrap();

        assert_eq!(request.personal_info.get_str("name").unwrap(), "Ana");
        assert_eq!(request.skills, vec!["rust".to_string()]);
        assert_eq!(request.certifications, vec!["AWS".to_string()]);
    }
}
