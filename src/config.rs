//! Client configuration.
//!
//! Defaults match the blog backend's routes and storage keys. A page may
//! override any field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="blog-client-config">{"api_base": "/blog"}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "blog-client-config";

pub const DEFAULT_TOKEN_KEY: &str = "access_token";
pub const DEFAULT_THEME_KEY: &str = "blog_theme";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path. Empty means same origin.
    pub api_base: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    /// `localStorage` key holding `light` / `dark`.
    pub theme_key: String,
    pub home_path: String,
    pub login_path: String,
    pub register_path: String,
    /// Placeholder element the navigation island mounts into.
    pub nav_mount_id: String,
    /// Placeholder element the new-post island mounts into.
    pub new_post_mount_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            home_path: "/".to_owned(),
            login_path: "/login".to_owned(),
            register_path: "/register".to_owned(),
            nav_mount_id: "site-nav".to_owned(),
            new_post_mount_id: "new-post-root".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not a JSON object of known field types.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Like `from_json`, but falls back to defaults on blank or invalid input.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|e| {
            log::warn!("ignoring invalid client config: {e}");
            Self::default()
        })
    }

    /// Read the inline config block from the current document.
    #[cfg(feature = "csr")]
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_json_or_default(raw.as_deref())
    }
}
