//! Proof-of-posting submission form.
//!
//! DESIGN
//! ======
//! Content links are dynamic rows keyed by a client-generated id so Leptos
//! keyed iteration stays stable while the influencer edits them. At least one
//! row always exists.

#[cfg(test)]
#[path = "submission_form_test.rs"]
mod submission_form_test;

use crate::net::error::ApiError;
use crate::net::types::{ContentLink, SubmissionDraft};

/// One editable content-link row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRow {
    /// Client-side row key, never sent to the backend.
    pub id: String,
    pub url: String,
    pub platform: String,
}

impl LinkRow {
    fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            url: String::new(),
            platform: "Instagram".to_owned(),
        }
    }
}

/// Raw submission form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionForm {
    /// Selected campaign id; empty until the influencer picks one.
    pub campaign_id: String,
    pub links: Vec<LinkRow>,
    pub notes: String,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self { campaign_id: String::new(), links: vec![LinkRow::new()], notes: String::new() }
    }
}

impl SubmissionForm {
    pub fn set_campaign(&mut self, campaign_id: String) {
        self.campaign_id = campaign_id;
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }

    pub fn add_link(&mut self) {
        self.links.push(LinkRow::new());
    }

    /// Remove a row; the last remaining row cannot be removed.
    pub fn remove_link(&mut self, row_id: &str) {
        if self.links.len() > 1 {
            self.links.retain(|l| l.id != row_id);
        }
    }

    pub fn set_link_url(&mut self, row_id: &str, url: String) {
        if let Some(link) = self.links.iter_mut().find(|l| l.id == row_id) {
            link.url = url;
        }
    }

    pub fn set_link_platform(&mut self, row_id: &str, platform: String) {
        if let Some(link) = self.links.iter_mut().find(|l| l.id == row_id) {
            link.platform = platform;
        }
    }

    /// Run the client-side checks and produce the wire draft.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Invalid` when no campaign is selected or any link
    /// row has an empty URL.
    pub fn validate(&self) -> Result<SubmissionDraft, ApiError> {
        if self.campaign_id.is_empty() {
            return Err(ApiError::invalid("select a campaign"));
        }
        if self.links.iter().any(|l| l.url.trim().is_empty()) {
            return Err(ApiError::invalid("every content link needs a URL"));
        }
        let links = self
            .links
            .iter()
            .map(|l| ContentLink { url: l.url.trim().to_owned(), platform: l.platform.clone() })
            .collect();
        let notes = self.notes.trim();
        Ok(SubmissionDraft {
            campaign_id: self.campaign_id.clone(),
            links,
            notes: if notes.is_empty() { None } else { Some(notes.to_owned()) },
        })
    }
}
