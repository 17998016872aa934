pub mod job;
pub mod resume;
pub mod user;

pub use job::*;
pub use resume::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Acknowledgment body shared by write endpoints that return no entity.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
