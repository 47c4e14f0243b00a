//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `api` knows the endpoints and status
//! conventions, and `types` defines the JSON shapes.

pub mod api;
pub mod http;
pub mod types;
