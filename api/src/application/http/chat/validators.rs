use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatMessageValidator {
    #[validate(length(min = 1, max = 2000, message = "message must be 1 to 2000 characters"))]
    pub message: String,
}
