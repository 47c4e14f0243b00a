//! Page-level controllers.
//!
//! ARCHITECTURE
//! ============
//! Pages are server rendered; `home` holds the decisions shared by every
//! page's chrome and leaves rendering to `components`.

pub mod home;
