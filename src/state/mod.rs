//! Client-side state.
//!
//! DESIGN
//! ======
//! `credentials` and `session` hold browser-lifetime data shared by every
//! island; `auth` and `post_modal` are the small view models behind the
//! navigation bar and the new-post dialog.

pub mod auth;
pub mod credentials;
pub mod post_modal;
pub mod session;
