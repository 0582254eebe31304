//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the uniform request contract (bearer attach, content-type
//! selection, error normalization), `types` defines the wire schema, and the
//! per-domain `*_api` modules expose one function per backend operation.

pub mod ads_api;
pub mod auth_api;
pub mod error;
pub mod http;
pub mod influencers_api;
pub mod onboarding_api;
pub mod profile_api;
pub mod requests_api;
pub mod submissions_api;
pub mod types;
