use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// Document in the "users" collection. Never updated or deleted after
/// signup; the password field holds a bcrypt hash, never plaintext.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<BsonDateTime>,
}

/// Public view of a user with the password hash stripped.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        UserInfo {
            id: user.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_strips_password() {
        let user = User {
            id: Some(ObjectId::parse_str("60c72b9f9b1d8c001f8e4c8a").unwrap()),
            email: "ana@example.com".to_string(),
            password: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            created_at: None,
        };

        let info = UserInfo::from(user);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["id"], "60c72b9f9b1d8c001f8e4c8a");
        assert_eq!(json["email"], "ana@example.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_stored_user_omits_missing_id() {
        let user = User {
            id: None,
            email: "ana@example.com".to_string(),
            password: "hash".to_string(),
            created_at: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["password"], "hash");
    }
}
