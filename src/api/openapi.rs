//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{post_handler, user_handler};
use crate::domain::{PostResponse, User};

/// OpenAPI documentation for the user/post API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User/Post API",
        version = "0.1.0",
        description = "Create users and the posts they own",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        post_handler::create_post,
    ),
    components(
        schemas(
            User,
            PostResponse,
            user_handler::CreateUserRequest,
            post_handler::CreatePostRequest,
        )
    ),
    tags(
        (name = "Users", description = "User creation"),
        (name = "Posts", description = "Post creation")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_both_endpoints() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/posts"));
    }
}
