//! Browser capability traits and their `web-sys` implementations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each trait wraps one browser global (storage, location, document root) so
//! session and page logic can run in native unit tests.

pub mod dom;
pub mod navigator;
pub mod storage;
pub mod theme;
