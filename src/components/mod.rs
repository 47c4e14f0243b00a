//! Leptos islands mounted into server-rendered pages.

pub mod nav_bar;
pub mod new_post_modal;
