use crate::{
    database::{self, MongoDB},
    error::{is_duplicate_key, ServiceError},
    models::{User, UserInfo},
};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

// JWT Claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub iat: usize, // issued at
    pub exp: usize, // expiration
    pub jti: String, // JWT ID
    pub aud: String, // audience
    pub iss: String, // issuer
}

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

fn get_jwt_issuer() -> String {
    std::env::var("JWT_ISSUER").unwrap_or_else(|_| "resume-service".to_string())
}

fn get_jwt_audience() -> String {
    std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "resume-api".to_string())
}

// Generate JWT token (24h expiry)
pub fn generate_jwt(user_id: &str, email: &str) -> Result<String, ServiceError> {
    let iat = Utc::now().timestamp() as usize;
    let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let jti = Uuid::new_v4().to_string();

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat,
        exp,
        jti,
        aud: get_jwt_audience(),
        iss: get_jwt_issuer(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_jwt_secret().as_ref()),
    )
    .map_err(|e| ServiceError::Internal(format!("Failed to generate token: {}", e)))
}

// Verify JWT token, validating audience and issuer
pub fn verify_token(token: &str) -> Result<Claims, ServiceError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[get_jwt_audience()]);

    let mut issuers = HashSet::new();
    issuers.insert(get_jwt_issuer());
    validation.iss = Some(issuers);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_jwt_secret().as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| ServiceError::Unauthorized(format!("Invalid token: {}", e)))
}

// User signup. Email uniqueness is enforced by the unique index on
// users(email); a duplicate-key write error maps to Conflict.
pub async fn signup(db: &MongoDB, request: &SignupRequest) -> Result<SignupResponse, ServiceError> {
    let collection = db.collection::<User>(database::USERS);

    let hashed_password = hash(&request.password, DEFAULT_COST)
        .map_err(|e| ServiceError::Internal(format!("Failed to hash password: {}", e)))?;

    let new_user = User {
        id: None,
        email: request.email.clone(),
        password: hashed_password,
        created_at: Some(BsonDateTime::now()),
    };

    let result = collection.insert_one(&new_user).await.map_err(|e| {
        if is_duplicate_key(&e) {
            ServiceError::Conflict("Email already registered".to_string())
        } else {
            ServiceError::Database(e)
        }
    })?;

    let id = result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .unwrap_or_default();

    Ok(SignupResponse {
        success: true,
        message: "User created successfully".to_string(),
        id,
    })
}

// User login. A missing email and a failed password check produce the same
// Unauthorized error so the response does not reveal which one happened.
pub async fn login(db: &MongoDB, request: &LoginRequest) -> Result<AuthResponse, ServiceError> {
    let collection = db.collection::<User>(database::USERS);

    let user = collection
        .find_one(doc! { "email": &request.email })
        .await?
        .ok_or_else(|| ServiceError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = verify(&request.password, &user.password)
        .map_err(|e| ServiceError::Internal(format!("Password verification error: {}", e)))?;

    if !valid {
        return Err(ServiceError::Unauthorized("Invalid credentials".to_string()));
    }

    let user_id = user
        .id
        .map(|oid| oid.to_hex())
        .ok_or_else(|| ServiceError::Internal("User document missing _id".to_string()))?;

    let token = generate_jwt(&user_id, &user.email)?;

    Ok(AuthResponse {
        success: true,
        token,
        user: UserInfo {
            id: user_id,
            email: user.email,
        },
    })
}

// Get current user by id, password hash stripped
pub async fn get_current_user(db: &MongoDB, user_id: &str) -> Result<UserInfo, ServiceError> {
    let collection = db.collection::<User>(database::USERS);

    let oid = ObjectId::parse_str(user_id)
        .map_err(|_| ServiceError::NotFound("User not found".to_string()))?;

    let user = collection
        .find_one(doc! { "_id": oid })
        .await?
        .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

    Ok(UserInfo::from(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hashed = hash("hunter2", DEFAULT_COST).unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(verify("hunter2", &hashed).unwrap());
        assert!(!verify("hunter3", &hashed).unwrap());
    }

    #[test]
    fn test_jwt_round_trip() {
        let token = generate_jwt("60c72b9f9b1d8c001f8e4c8a", "ana@example.com").unwrap();
        let claims = verify_token(&token).unwrap();

        assert_eq!(claims.sub, "60c72b9f9b1d8c001f8e4c8a");
        assert_eq!(claims.email, "ana@example.com");
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let result = verify_token("not.a.token");
        assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = generate_jwt("60c72b9f9b1d8c001f8e4c8a", "ana@example.com").unwrap();
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        parts[1] = parts[1].chars().rev().collect();
        let tampered = parts.join(".");

        assert!(verify_token(&tampered).is_err());
    }
}
