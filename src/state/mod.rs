//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `toast`, form models) so
//! individual components can depend on small focused models. Each module
//! exposes a plain struct that `app` wraps in an `RwSignal` context.

pub mod auth;
pub mod campaign_form;
pub mod session;
pub mod submission_form;
pub mod toast;
