//! User handlers.

use axum::{extract::State, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewUser, User};
use crate::errors::AppResult;
use crate::types::Created;

/// User creation request
///
/// Every field must be present, non-null and non-empty.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "firstName is required"),
        length(min = 1, message = "firstName is required")
    )]
    #[schema(example = "Ana")]
    pub first_name: Option<String>,
    #[validate(
        required(message = "lastName is required"),
        length(min = 1, message = "lastName is required")
    )]
    #[schema(example = "Silva")]
    pub last_name: Option<String>,
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    #[schema(example = "ana@x.com")]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    // Only called after validation, so every field is present
    fn from(req: CreateUserRequest) -> Self {
        NewUser::new(
            req.first_name.unwrap_or_default(),
            req.last_name.unwrap_or_default(),
            req.email.unwrap_or_default(),
        )
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "User could not be saved")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<User>> {
    let user = state.services.users.create_user(payload.into()).await?;
    Ok(Created(user))
}
