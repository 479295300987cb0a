//! Post handlers.

use axum::{extract::State, routing::post, Router};
use serde::{de, Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewPost, PostResponse};
use crate::errors::AppResult;
use crate::types::Created;

/// Post creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePostRequest {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    #[schema(example = "Hi")]
    pub title: Option<String>,
    #[validate(
        required(message = "description is required"),
        length(min = 1, message = "description is required")
    )]
    #[schema(example = "First post")]
    pub description: Option<String>,
    /// Owner ID, as a JSON integer or a string of digits
    #[serde(default, deserialize_with = "deserialize_user_id")]
    #[validate(required(message = "userId is required"))]
    #[schema(value_type = i64, example = 1)]
    pub user_id: Option<i64>,
}

impl From<CreatePostRequest> for NewPost {
    // Only called after validation, so every field is present
    fn from(req: CreatePostRequest) -> Self {
        NewPost::new(
            req.title.unwrap_or_default(),
            req.description.unwrap_or_default(),
            req.user_id.unwrap_or_default(),
        )
    }
}

/// Accept `1` or `"1"`; `null` counts as missing and so does the number `0`.
///
/// Any other integer is passed through, even one no user can have: the
/// lookup decides, and answers 404. Integers beyond `i64` saturate.
fn deserialize_user_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Signed(i64),
        Unsigned(u64),
        Text(String),
    }

    let Some(raw) = Option::<RawId>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw {
        RawId::Signed(0) => Err(de::Error::custom("userId is required")),
        RawId::Signed(n) => Ok(Some(n)),
        RawId::Unsigned(_) => Ok(Some(i64::MAX)),
        RawId::Text(s) => parse_integer(s.trim())
            .map(Some)
            .ok_or_else(|| de::Error::custom("userId must be an integer")),
    }
}

/// Parse an optionally signed run of digits, saturating at the `i64` bounds.
fn parse_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match text.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if text.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new().route("/posts", post(create_post))
}

/// Create a post for an existing user
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Post could not be saved")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePostRequest>,
) -> AppResult<Created<PostResponse>> {
    let post = state.services.posts.create_post(payload.into()).await?;
    Ok(Created(post))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<CreatePostRequest, serde_json::Error> {
        serde_json::from_value(value)
    }

    fn user_id_of(value: serde_json::Value) -> Option<i64> {
        parse(json!({"title": "Hi", "description": "x", "userId": value}))
            .unwrap()
            .user_id
    }

    #[test]
    fn test_user_id_accepts_number_and_numeric_string() {
        assert_eq!(user_id_of(json!(1)), Some(1));
        assert_eq!(user_id_of(json!("42")), Some(42));
        assert_eq!(user_id_of(json!(" 7 ")), Some(7));
    }

    #[test]
    fn test_user_id_keeps_integers_no_user_can_have() {
        assert_eq!(user_id_of(json!(-3)), Some(-3));
        assert_eq!(user_id_of(json!("0")), Some(0));
        assert_eq!(user_id_of(json!("-7")), Some(-7));
        assert_eq!(user_id_of(json!(4_294_967_296u64)), Some(4_294_967_296));
    }

    #[test]
    fn test_user_id_saturates_beyond_i64() {
        assert_eq!(user_id_of(json!(u64::MAX)), Some(i64::MAX));
        assert_eq!(user_id_of(json!("99999999999999999999999")), Some(i64::MAX));
        assert_eq!(user_id_of(json!("-99999999999999999999999")), Some(i64::MIN));
    }

    #[test]
    fn test_user_id_missing_or_null_is_none() {
        let missing = parse(json!({"title": "Hi", "description": "x"})).unwrap();

        assert_eq!(missing.user_id, None);
        assert_eq!(user_id_of(json!(null)), None);
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_user_id_rejects_zero_and_non_integers() {
        for bad in [json!(0), json!("abc"), json!(""), json!("-"), json!("1.5"), json!(1.5), json!(true)] {
            let result = parse(json!({"title": "Hi", "description": "x", "userId": bad}));
            assert!(result.is_err(), "accepted userId {bad}");
        }
    }
}
