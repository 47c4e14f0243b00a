//! Class-list access on the document root (`<html>`).

/// The subset of `document.documentElement.classList` the theme toggle needs.
pub trait DocumentRoot {
    fn has_class(&self, class: &str) -> bool;
    fn set_class(&self, class: &str, enabled: bool);
}

/// Live `document.documentElement`.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDocumentRoot;

#[cfg(feature = "csr")]
impl BrowserDocumentRoot {
    fn element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

#[cfg(feature = "csr")]
impl DocumentRoot for BrowserDocumentRoot {
    fn has_class(&self, class: &str) -> bool {
        Self::element().map_or(false, |el| el.class_list().contains(class))
    }

    fn set_class(&self, class: &str, enabled: bool) {
        if let Some(el) = Self::element() {
            let _ = el.class_list().toggle_with_force(class, enabled);
        }
    }
}
