//! REST API helpers for the blog backend.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures surface as `ApiError`, including an error
//! response whose body is not JSON. Statuses the UI treats specially (401 on
//! post creation) are modelled as outcomes, not errors, so callers can match
//! on them directly.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiError, ApiRequest, HttpClient};
use super::types::{ErrorBody, ErrorDetail, NewPost, User};

pub const CURRENT_USER_PATH: &str = "/api/users/me";
pub const POSTS_PATH: &str = "/api/posts";

/// Shown when a rejected post carries no usable `detail`.
pub const CREATE_POST_FALLBACK_MESSAGE: &str = "Failed to create post.";

fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}{path}", api_base.trim_end_matches('/'))
}

/// Server verdict on a `POST /api/posts` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreatePostResponse {
    Created,
    Unauthorized,
    /// Any other non-2xx status, with a display message from the body.
    Rejected(String),
}

/// Fetch the user the bearer `token` belongs to.
///
/// # Errors
///
/// `ApiError::Status` for any non-2xx answer, `Transport`/`Decode` otherwise.
pub async fn fetch_current_user(
    client: &dyn HttpClient,
    api_base: &str,
    token: &str,
) -> Result<User, ApiError> {
    let request = ApiRequest::get(endpoint(api_base, CURRENT_USER_PATH)).with_bearer(Some(token));
    let resp = client.send(request).await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status));
    }
    resp.json::<User>()
}

/// Create a post authored by the owner of `token`.
///
/// # Errors
///
/// `ApiError::Transport` when no response was received, `ApiError::Decode`
/// when a non-2xx response carries a body that is not JSON.
pub async fn create_post(
    client: &dyn HttpClient,
    api_base: &str,
    token: Option<&str>,
    post: &NewPost,
) -> Result<CreatePostResponse, ApiError> {
    let body = serde_json::to_value(post)?;
    let request = ApiRequest::post_json(endpoint(api_base, POSTS_PATH), body).with_bearer(token);
    let resp = client.send(request).await?;
    if resp.ok() {
        return Ok(CreatePostResponse::Created);
    }
    if resp.status == 401 {
        return Ok(CreatePostResponse::Unauthorized);
    }
    let body = resp.json::<ErrorBody>()?;
    Ok(CreatePostResponse::Rejected(error_message(body.detail.as_ref())))
}

/// Human-readable text for an error `detail`.
///
/// Validation lists are joined with `", "`; anything else falls back to a
/// generic message.
pub fn error_message(detail: Option<&ErrorDetail>) -> String {
    match detail {
        Some(ErrorDetail::Message(msg)) => msg.clone(),
        Some(ErrorDetail::Issues(issues)) if !issues.is_empty() => issues
            .iter()
            .map(|issue| issue.msg.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => CREATE_POST_FALLBACK_MESSAGE.to_owned(),
    }
}
