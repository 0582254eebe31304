//! One-time profile-completion wizards, required before dashboard access.

pub mod business;
pub mod influencer;
pub mod link_socials;
