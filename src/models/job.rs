use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Document in the "job_analyses" collection. Many per user; always scoped
/// by user_id on read and delete.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub extracted_role: String,
    pub extracted_domain: String,
    #[serde(default)]
    pub key_requirements: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "user_id")]
    pub user_id: String,
}

/// Wire shape for a stored analysis. The creation date is derived from the
/// timestamp embedded in the ObjectId, so the document carries no extra
/// field for it.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysisView {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub extracted_role: String,
    pub extracted_domain: String,
    pub key_requirements: Vec<String>,
    pub notes: String,
    pub created_date: String,
    #[serde(rename = "user_id")]
    pub user_id: String,
}

impl From<JobAnalysis> for JobAnalysisView {
    fn from(analysis: JobAnalysis) -> Self {
        let (id, created_date) = match analysis.id {
            Some(oid) => (oid.to_hex(), oid_created_date(&oid)),
            None => (String::new(), String::new()),
        };

        JobAnalysisView {
            id,
            job_title: analysis.job_title,
            company: analysis.company,
            job_description: analysis.job_description,
            extracted_role: analysis.extracted_role,
            extracted_domain: analysis.extracted_domain,
            key_requirements: analysis.key_requirements,
            notes: analysis.notes.unwrap_or_default(),
            created_date,
            user_id: analysis.user_id,
        }
    }
}

/// RFC 3339 rendering of the creation time embedded in an ObjectId.
pub fn oid_created_date(oid: &ObjectId) -> String {
    DateTime::<Utc>::from_timestamp_millis(oid.timestamp().timestamp_millis())
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis(id: Option<ObjectId>) -> JobAnalysis {
        JobAnalysis {
            id,
            job_title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            job_description: "Build services".to_string(),
            extracted_role: "Engineer".to_string(),
            extracted_domain: "SaaS".to_string(),
            key_requirements: vec!["Rust".to_string(), "MongoDB".to_string()],
            notes: None,
            user_id: "60c72b9f9b1d8c001f8e4c8a".to_string(),
        }
    }

    #[test]
    fn test_created_date_comes_from_object_id() {
        // 0x60c72b9f = 2021-06-14 UTC
        let oid = ObjectId::parse_str("60c72b9f9b1d8c001f8e4c8a").unwrap();
        let view = JobAnalysisView::from(sample_analysis(Some(oid)));

        assert_eq!(view.id, "60c72b9f9b1d8c001f8e4c8a");
        assert!(view.created_date.starts_with("2021-06-14T"));
    }

    #[test]
    fn test_missing_notes_render_as_empty_string() {
        let oid = ObjectId::parse_str("60c72b9f9b1d8c001f8e4c8a").unwrap();
        let view = JobAnalysisView::from(sample_analysis(Some(oid)));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["notes"], "");
        assert_eq!(json["jobTitle"], "Backend Engineer");
        assert_eq!(json["user_id"], "60c72b9f9b1d8c001f8e4c8a");
        assert!(json["createdDate"].as_str().is_some());
    }

    #[test]
    fn test_request_body_deserializes_without_notes() {
        let analysis: JobAnalysis = serde_json::from_value(serde_json::json!({
            "jobTitle": "SRE",
            "company": "Globex",
            "jobDescription": "Keep it up",
            "extractedRole": "SRE",
            "extractedDomain": "Infra",
            "keyRequirements": ["Linux"],
            "user_id": "abc"
        }))
        .unwrap();

        assert!(analysis.id.is_none());
        assert!(analysis.notes.is_none());
        assert_eq!(analysis.key_requirements, vec!["Linux".to_string()]);
    }
}
