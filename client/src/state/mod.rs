//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`profile`, `compare`, `signup`) plus the
//! cross-cutting `session` and `notify` channels, so each component depends
//! on a small focused model that can be tested without a browser.

pub mod compare;
pub mod notify;
pub mod profile;
pub mod session;
pub mod signup;
pub mod validation;
