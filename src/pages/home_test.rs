use super::*;
use crate::net::http::Method;
use crate::test_support::{Harness, ScriptedClient};
use futures::executor::block_on;

const ME: &str = r#"{"id":3,"username":"carol"}"#;

/// Drive one submission from an open dialog, the way the new-post island does.
fn submit(h: &Harness, modal: &mut PostModalState, title: &str, content: &str) {
    modal.title = title.to_owned();
    modal.content = content.to_owned();
    assert!(modal.begin_submit());
    let outcome = block_on(submit_post(&h.services, title, content));
    if let Some(action) = apply_submit_outcome(modal, outcome) {
        h.services.perform(action);
    }
}

fn open_modal() -> PostModalState {
    let mut modal = PostModalState::default();
    modal.open();
    modal
}

// =============================================================
// Local validation
// =============================================================

#[test]
fn validate_new_post_trims_fields() {
    assert_eq!(
        validate_new_post("  Hello ", "\n body \t"),
        Ok(NewPost { title: "Hello".to_owned(), content: "body".to_owned() })
    );
}

#[test]
fn validate_new_post_requires_both_fields() {
    assert_eq!(validate_new_post("", "content"), Err(FIELDS_REQUIRED_MESSAGE));
    assert_eq!(validate_new_post("title", "   "), Err(FIELDS_REQUIRED_MESSAGE));
}

#[test]
fn empty_title_shows_required_message_without_network() {
    let h = Harness::signed_in(ScriptedClient::new());
    let mut modal = open_modal();
    submit(&h, &mut modal, "", "non-empty");

    assert_eq!(h.client.request_count(), 0);
    assert!(modal.visible);
    assert_eq!(modal.error.as_deref(), Some("All fields are required."));
    assert!(!modal.busy);
}

// =============================================================
// Successful post
// =============================================================

#[test]
fn successful_post_hides_modal_and_reloads() {
    let h = Harness::signed_in(ScriptedClient::new().respond(200, ME).respond(201, r#"{"id":9}"#));
    let mut modal = open_modal();
    submit(&h, &mut modal, " First post ", " Hello ");

    assert!(!modal.visible);
    assert_eq!(modal, PostModalState::default());
    assert_eq!(h.navigator.reloads(), 1);
    assert!(h.navigator.assigned().is_empty());
}

#[test]
fn post_request_sends_trimmed_body_and_bearer() {
    let h = Harness::signed_in(ScriptedClient::new().respond(200, ME).respond(201, "{}"));
    let mut modal = open_modal();
    submit(&h, &mut modal, " First post ", " Hello ");

    let requests = h.client.requests();
    assert_eq!(requests.len(), 2);
    let post = &requests[1];
    assert_eq!(post.method, Method::Post);
    assert_eq!(post.path, "/api/posts");
    assert_eq!(post.authorization().as_deref(), Some("Bearer tok-1"));
    assert_eq!(post.body, Some(serde_json::json!({ "title": "First post", "content": "Hello" })));
}

// =============================================================
// Login required
// =============================================================

#[test]
fn unauthorized_response_redirects_to_login_without_inline_error() {
    let h = Harness::signed_in(
        ScriptedClient::new().respond(200, ME).respond(401, r#"{"detail":"Not authenticated"}"#),
    );
    let mut modal = open_modal();
    submit(&h, &mut modal, "t", "c");

    assert_eq!(h.navigator.assigned(), vec!["/login".to_owned()]);
    assert_eq!(modal.error, None);
    assert_eq!(h.navigator.reloads(), 0);
}

#[test]
fn missing_session_redirects_to_login_without_posting() {
    let h = Harness::new(ScriptedClient::new());
    let mut modal = open_modal();
    submit(&h, &mut modal, "t", "c");

    assert_eq!(h.client.request_count(), 0);
    assert_eq!(h.navigator.assigned(), vec!["/login".to_owned()]);
    assert_eq!(modal.error, None);
}

#[test]
fn cached_user_skips_identity_lookup_on_submit() {
    let h = Harness::signed_in(ScriptedClient::new().respond(200, ME).respond(201, "{}"));
    block_on(load_auth_state(&h.services.session));
    let mut modal = open_modal();
    submit(&h, &mut modal, "t", "c");
    assert_eq!(h.client.request_count(), 2);
}

// =============================================================
// Rejections
// =============================================================

#[test]
fn validation_detail_list_is_shown_inline() {
    let h = Harness::signed_in(
        ScriptedClient::new()
            .respond(200, ME)
            .respond(422, r#"{"detail":[{"msg":"title too short"}]}"#),
    );
    let mut modal = open_modal();
    submit(&h, &mut modal, "t", "c");

    assert!(modal.visible);
    assert_eq!(modal.error.as_deref(), Some("title too short"));
    assert_eq!(h.navigator.reloads(), 0);
}

#[test]
fn string_detail_is_shown_inline() {
    let h = Harness::signed_in(
        ScriptedClient::new().respond(200, ME).respond(403, r#"{"detail":"Not allowed"}"#),
    );
    let mut modal = open_modal();
    submit(&h, &mut modal, "t", "c");
    assert_eq!(modal.error.as_deref(), Some("Not allowed"));
}

#[test]
fn transport_failure_shows_network_error() {
    let h = Harness::signed_in(ScriptedClient::new().respond(200, ME).fail("offline"));
    let mut modal = open_modal();
    submit(&h, &mut modal, "t", "c");

    assert!(modal.visible);
    assert_eq!(modal.error.as_deref(), Some(NETWORK_ERROR_MESSAGE));
}

#[test]
fn non_json_error_page_shows_network_error() {
    let h = Harness::signed_in(ScriptedClient::new().respond(200, ME).respond(502, "<html>Bad Gateway</html>"));
    let mut modal = open_modal();
    submit(&h, &mut modal, "t", "c");

    assert!(modal.visible);
    assert_eq!(modal.error.as_deref(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(h.navigator.reloads(), 0);
}

#[test]
fn error_stays_visible_after_retry_until_close() {
    let h = Harness::signed_in(
        ScriptedClient::new()
            .respond(200, ME)
            .respond(422, r#"{"detail":[{"msg":"title too short"}]}"#)
            .respond(500, "{}"),
    );
    let mut modal = open_modal();
    submit(&h, &mut modal, "t", "c");
    submit(&h, &mut modal, "t", "c");
    assert_eq!(modal.error.as_deref(), Some("Failed to create post."));

    modal.close();
    assert_eq!(modal.error, None);
    assert!(!modal.visible);
}

// =============================================================
// Navigation bar
// =============================================================

#[test]
fn load_auth_state_for_signed_in_user() {
    let h = Harness::signed_in(ScriptedClient::new().respond(200, ME));
    let state = block_on(load_auth_state(&h.services.session));
    assert!(state.show_member_nav());
    assert_eq!(state.greeting().as_deref(), Some("Welcome, carol"));
}

#[test]
fn load_auth_state_for_guest() {
    let h = Harness::new(ScriptedClient::new());
    let state = block_on(load_auth_state(&h.services.session));
    assert!(state.show_guest_nav());
}

#[test]
fn nav_buttons_navigate_to_auth_pages() {
    let h = Harness::new(ScriptedClient::new());
    h.services.go_to_login();
    h.services.go_to_register();
    assert_eq!(h.navigator.assigned(), vec!["/login".to_owned(), "/register".to_owned()]);
}

#[test]
fn services_logout_goes_home_and_forgets_token() {
    let h = Harness::signed_in(ScriptedClient::new());
    h.services.logout();
    assert_eq!(h.services.credentials.token(), None);
    assert_eq!(h.navigator.assigned(), vec!["/".to_owned()]);
}

#[test]
fn services_theme_toggle_updates_root_and_storage() {
    use crate::util::dom::DocumentRoot;
    use crate::util::storage::KeyValueStore;
    use crate::util::theme::{DARK_CLASS, Theme};

    let h = Harness::new(ScriptedClient::new());
    assert_eq!(h.services.restore_theme(), Theme::Light);
    assert_eq!(h.services.toggle_theme(), Theme::Dark);
    assert!(h.root.has_class(DARK_CLASS));
    assert_eq!(h.storage.get("blog_theme").as_deref(), Some("dark"));
    assert_eq!(h.services.current_theme(), Theme::Dark);
}
