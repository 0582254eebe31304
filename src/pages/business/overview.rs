//! Business overview: headline counts over ads and submissions.

use leptos::prelude::*;

use crate::net::ads_api;
use crate::net::submissions_api;
use crate::net::types::SubmissionStatus;

#[component]
pub fn BusinessOverviewPage() -> impl IntoView {
    let ads = LocalResource::new(|| async { ads_api::fetch_ads().await.unwrap_or_default() });
    let submissions = LocalResource::new(|| async {
        submissions_api::fetch_business_submissions().await.unwrap_or_default()
    });

    let campaign_count = move || ads.get().map_or(0, |list| list.len());
    let submission_count = move || submissions.get().map_or(0, |list| list.len());
    let pending_count = move || {
        submissions
            .get()
            .map_or(0, |list| list.iter().filter(|s| s.status == SubmissionStatus::Pending).count())
    };
    let approved_count = move || {
        submissions
            .get()
            .map_or(0, |list| list.iter().filter(|s| s.status == SubmissionStatus::Approved).count())
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Overview"</h1>
                <p>"Your campaigns and incoming submissions at a glance."</p>
            </header>
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__value">{campaign_count}</span>
                    <span class="stat-card__label">"Campaigns"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{submission_count}</span>
                    <span class="stat-card__label">"Submissions"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{pending_count}</span>
                    <span class="stat-card__label">"Pending review"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{approved_count}</span>
                    <span class="stat-card__label">"Approved"</span>
                </div>
            </div>
            <div class="quick-links">
                <a class="btn btn--primary" href="/dashboard/business/post-ads">"Post a campaign"</a>
                <a class="btn" href="/dashboard/business/influencers">"Find influencers"</a>
            </div>
        </div>
    }
}
