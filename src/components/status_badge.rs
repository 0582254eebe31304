//! Status badges for request and submission lifecycles.

use leptos::prelude::*;

use crate::net::types::{RequestStatus, SubmissionStatus};

fn request_meta(status: RequestStatus) -> (&'static str, &'static str) {
    match status {
        RequestStatus::Pending => ("Pending", "status-badge--pending"),
        RequestStatus::Accepted => ("Accepted", "status-badge--ok"),
        RequestStatus::Declined => ("Declined", "status-badge--bad"),
    }
}

fn submission_meta(status: SubmissionStatus) -> (&'static str, &'static str) {
    match status {
        SubmissionStatus::Pending => ("Pending", "status-badge--pending"),
        SubmissionStatus::Approved => ("Approved", "status-badge--ok"),
        SubmissionStatus::Rejected => ("Rejected", "status-badge--bad"),
    }
}

#[component]
pub fn RequestBadge(status: RequestStatus) -> impl IntoView {
    let (label, tone) = request_meta(status);
    view! { <span class=format!("status-badge {tone}")>{label}</span> }
}

#[component]
pub fn SubmissionBadge(status: SubmissionStatus) -> impl IntoView {
    let (label, tone) = submission_meta(status);
    view! { <span class=format!("status-badge {tone}")>{label}</span> }
}
