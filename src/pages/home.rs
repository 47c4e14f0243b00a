//! Page controller for the blog layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every server-rendered page shares the same chrome: a navigation bar whose
//! button groups depend on auth state, and (for signed-in users) a new-post
//! dialog. The islands in `components` call into this module for the
//! decisions and keep only rendering for themselves.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::app::{PageAction, Services};
use crate::net::api::{self, CreatePostResponse};
use crate::net::types::NewPost;
use crate::state::auth::AuthState;
use crate::state::post_modal::PostModalState;
use crate::state::session::SessionCache;

pub const FIELDS_REQUIRED_MESSAGE: &str = "All fields are required.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Resolve the navigation auth state for this page view.
pub async fn load_auth_state(session: &SessionCache) -> AuthState {
    AuthState::resolved(session.get_user().await)
}

/// Trim both fields and require them to be non-empty.
///
/// # Errors
///
/// Returns the inline message to show when either field is blank.
pub fn validate_new_post(title: &str, content: &str) -> Result<NewPost, &'static str> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(FIELDS_REQUIRED_MESSAGE);
    }
    Ok(NewPost { title: title.to_owned(), content: content.to_owned() })
}

/// Result of one new-post submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    /// No signed-in user, or the server rejected the token.
    LoginRequired,
    /// Rejected locally before any request was made.
    Invalid(String),
    /// The server or the network refused the post.
    Failed(String),
}

/// Validate, check the session and create the post.
///
/// The author is whoever owns the bearer token; no user id is sent.
pub async fn submit_post(services: &Services, title: &str, content: &str) -> SubmitOutcome {
    let post = match validate_new_post(title, content) {
        Ok(post) => post,
        Err(message) => return SubmitOutcome::Invalid(message.to_owned()),
    };
    if services.session.get_user().await.is_none() {
        return SubmitOutcome::LoginRequired;
    }
    let token = services.credentials.token();
    match api::create_post(services.client.as_ref(), &services.config.api_base, token.as_deref(), &post).await {
        Ok(CreatePostResponse::Created) => SubmitOutcome::Created,
        Ok(CreatePostResponse::Unauthorized) => SubmitOutcome::LoginRequired,
        Ok(CreatePostResponse::Rejected(message)) => {
            log::warn!("post rejected: {message}");
            SubmitOutcome::Failed(message)
        }
        Err(e) => {
            log::warn!("post submission failed: {e}");
            SubmitOutcome::Failed(NETWORK_ERROR_MESSAGE.to_owned())
        }
    }
}

/// Fold an outcome into the dialog and return the navigation it calls for.
pub fn apply_submit_outcome(modal: &mut PostModalState, outcome: SubmitOutcome) -> Option<PageAction> {
    match outcome {
        SubmitOutcome::Created => {
            modal.close();
            Some(PageAction::Reload)
        }
        SubmitOutcome::LoginRequired => {
            modal.settle();
            Some(PageAction::GoToLogin)
        }
        SubmitOutcome::Invalid(message) | SubmitOutcome::Failed(message) => {
            modal.fail(message);
            None
        }
    }
}
