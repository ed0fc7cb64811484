//! HTTP middleware module.
//!
//! Provides HTTP-level middleware for security headers. CORS is
//! configured in `server::create_router` from `CORS_ALLOWED_ORIGIN`.

pub mod security;

pub use security::security_headers;
