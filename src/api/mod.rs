pub mod auth;
pub mod health;
pub mod jobs;
pub mod metrics;
pub mod resumes;
pub mod swagger;
