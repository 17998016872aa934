use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
}

/// Document in the "master_resumes" collection. One per user (unique index
/// on user_id), replaced wholesale on every save.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MasterResume {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "user_id")]
    pub user_id: String,
    /// Free-form key/value block (name, contact details, links, ...)
    #[serde(default)]
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

/// Wire shape returned by GET /api/v1/resumes/master.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasterResumeView {
    pub id: String,
    #[schema(value_type = Object)]
    pub personal_info: Document,
    pub work_experiences: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    #[serde(rename = "user_id")]
    pub user_id: String,
}

impl From<MasterResume> for MasterResumeView {
    fn from(resume: MasterResume) -> Self {
        MasterResumeView {
            id: resume.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            personal_info: resume.personal_info,
            work_experiences: resume.work_experiences,
            education: resume.education,
            skills: resume.skills,
            certifications: resume.certifications,
            user_id: resume.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn sample_resume() -> MasterResume {
        MasterResume {
            id: Some(ObjectId::parse_str("60c72b9f9b1d8c001f8e4c8b").unwrap()),
            user_id: "60c72b9f9b1d8c001f8e4c8a".to_string(),
            personal_info: doc! { "name": "Ana", "location": "Lisbon" },
            work_experiences: vec![WorkExperience {
                id: "we-1".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: "2020-01".to_string(),
                end_date: "2023-06".to_string(),
                description: "Backend work".to_string(),
                tags: vec!["rust".to_string(), "mongodb".to_string()],
            }],
            education: vec![Education {
                id: "ed-1".to_string(),
                institution: "IST".to_string(),
                degree: "BSc".to_string(),
                field: "CS".to_string(),
                graduation_date: "2019".to_string(),
            }],
            skills: vec!["rust".to_string()],
            certifications: vec![],
        }
    }

    #[test]
    fn test_view_wire_shape_is_camel_case() {
        let view = MasterResumeView::from(sample_resume());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], "60c72b9f9b1d8c001f8e4c8b");
        assert_eq!(json["user_id"], "60c72b9f9b1d8c001f8e4c8a");
        assert_eq!(json["personalInfo"]["name"], "Ana");
        assert_eq!(json["workExperiences"][0]["startDate"], "2020-01");
        assert_eq!(json["education"][0]["graduationDate"], "2019");
        assert!(json.get("work_experiences").is_none());
    }

    #[test]
    fn test_work_experience_deserializes_from_camel_case() {
        let experience: WorkExperience = serde_json::from_value(serde_json::json!({
            "id": "we-2",
            "company": "Globex",
            "position": "SRE",
            "startDate": "2021-03",
            "endDate": "2022-09",
            "description": "On-call",
            "tags": ["ops"]
        }))
        .unwrap();

        assert_eq!(experience.start_date, "2021-03");
        assert_eq!(experience.tags, vec!["ops".to_string()]);
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let experience: WorkExperience = serde_json::from_value(serde_json::json!({
            "id": "we-3",
            "company": "Initech",
            "position": "Dev",
            "startDate": "2018-01",
            "endDate": "2019-01",
            "description": ""
        }))
        .unwrap();

        assert!(experience.tags.is_empty());
    }
}
