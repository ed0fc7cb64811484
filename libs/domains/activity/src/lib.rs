//! User Activity Domain
//!
//! A stub activity feed serving canned events through the same route and
//! response conventions as the rest of the API. Swap the canned feed for
//! a real event store without touching the HTTP surface.

pub mod handlers;
pub mod models;

pub use handlers::ApiDoc;
pub use models::ActivityEvent;
