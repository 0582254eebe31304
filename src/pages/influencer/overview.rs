//! Influencer overview: headline counts over campaigns and requests.

use leptos::prelude::*;

use crate::net::requests_api;
use crate::net::types::RequestStatus;
use crate::state::auth::AuthState;

#[component]
pub fn InfluencerOverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let ads = LocalResource::new(move || {
        let user_id = auth.get().user().map(|u| u.id.clone());
        async move {
            match user_id {
                Some(id) => requests_api::fetch_available_ads(&id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });
    let requests = LocalResource::new(move || {
        let user_id = auth.get().user().map(|u| u.id.clone());
        async move {
            match user_id {
                Some(id) => requests_api::fetch_request_status(&id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let available_count = move || ads.get().map_or(0, |list| list.len());
    let pending_count = move || {
        requests
            .get()
            .map_or(0, |list| list.iter().filter(|r| r.status == RequestStatus::Pending).count())
    };
    let accepted_count = move || {
        requests
            .get()
            .map_or(0, |list| list.iter().filter(|r| r.status == RequestStatus::Accepted).count())
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Overview"</h1>
                <p>"Campaigns and collaboration requests waiting for you."</p>
            </header>
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__value">{available_count}</span>
                    <span class="stat-card__label">"Available campaigns"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{pending_count}</span>
                    <span class="stat-card__label">"Pending requests"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{accepted_count}</span>
                    <span class="stat-card__label">"Active collaborations"</span>
                </div>
            </div>
            <div class="quick-links">
                <a class="btn btn--primary" href="/dashboard/influencer/ads">"Browse campaigns"</a>
                <a class="btn" href="/dashboard/influencer/requests">"Review requests"</a>
            </div>
        </div>
    }
}
