//! Page navigation capability.
//!
//! Navigation is plain URL assignment; the server renders every page, so
//! there is no client-side router.

/// Browser location operations used by the page controller.
pub trait Navigator {
    /// Navigate to `url` (equivalent of `location.href = url`).
    fn assign(&self, url: &str);
    /// Reload the current page.
    fn reload(&self);
}

/// `window.location` backed navigator.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
impl Navigator for BrowserNavigator {
    fn assign(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
