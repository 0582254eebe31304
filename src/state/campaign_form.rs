//! Strongly-typed campaign composition form.
//!
//! DESIGN
//! ======
//! One struct with explicit per-field update functions instead of a generic
//! name-keyed change handler. `validate` performs the client-side
//! required-field checks before dispatch; the backend remains authoritative
//! for all business rules, so these checks are a UX convenience and not a
//! security boundary.

#[cfg(test)]
#[path = "campaign_form_test.rs"]
mod campaign_form_test;

use crate::net::error::ApiError;
use crate::net::types::{CampaignDraft, CompensationMode, Platform};

/// Raw field values as typed into the create-campaign / send-request forms.
/// Numeric fields stay `String` until validation so partial input never
/// panics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignForm {
    pub name: String,
    pub platforms: Vec<Platform>,
    pub start_date: String,
    pub end_date: String,
    pub task_count: String,
    pub compensation: CompensationMode,
    pub budget: String,
    pub requirements: String,
    pub description: String,
}

impl CampaignForm {
    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    /// Flip a platform checkbox, preserving selection order.
    pub fn toggle_platform(&mut self, platform: Platform) {
        if let Some(pos) = self.platforms.iter().position(|p| *p == platform) {
            self.platforms.remove(pos);
        } else {
            self.platforms.push(platform);
        }
    }

    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    pub fn set_start_date(&mut self, value: String) {
        self.start_date = value;
    }

    pub fn set_end_date(&mut self, value: String) {
        self.end_date = value;
    }

    pub fn set_task_count(&mut self, value: String) {
        self.task_count = value;
    }

    pub fn set_compensation(&mut self, mode: CompensationMode) {
        self.compensation = mode;
    }

    pub fn set_budget(&mut self, value: String) {
        self.budget = value;
    }

    pub fn set_requirements(&mut self, value: String) {
        self.requirements = value;
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
    }

    /// Run the client-side checks and produce the wire draft.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Invalid` naming the first failing field.
    pub fn validate(&self) -> Result<CampaignDraft, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::invalid("campaign name is required"));
        }
        if self.platforms.is_empty() {
            return Err(ApiError::invalid("select at least one platform"));
        }
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err(ApiError::invalid("both start and end dates are required"));
        }
        // Date inputs yield ISO `YYYY-MM-DD`, so lexicographic order is date order.
        if self.end_date < self.start_date {
            return Err(ApiError::invalid("end date must not be before the start date"));
        }
        let task_count: u32 = self
            .task_count
            .trim()
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ApiError::invalid("task count must be a positive number"))?;
        let budget = match self.compensation {
            CompensationMode::Paid => {
                let amount: f64 = self
                    .budget
                    .trim()
                    .parse()
                    .ok()
                    .filter(|b| *b > 0.0)
                    .ok_or_else(|| ApiError::invalid("a budget is required for paid campaigns"))?;
                Some(amount)
            }
            CompensationMode::Barter => None,
        };

        Ok(CampaignDraft {
            campaign_name: name.to_owned(),
            platforms: self.platforms.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            task_count,
            compensation: self.compensation,
            budget,
            requirements: none_if_blank(&self.requirements),
            campaign_description: none_if_blank(&self.description),
        })
    }
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
