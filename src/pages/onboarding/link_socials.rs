//! Link-socials onboarding step.
//!
//! Status is a best-effort read; on failure the badges simply render as
//! unlinked. The Instagram link action hands off to the backend's OAuth flow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::net::http;
use crate::net::profile_api;
use crate::state::auth::AuthState;
use crate::util::guard;

#[component]
pub fn LinkSocialsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    guard::install_redirect(auth, None, navigate.clone());

    let status = LocalResource::new(|| profile_api::fetch_linked_socials());

    let instagram_oauth = format!("{}/api/linkSocials/instagram", http::base_url());

    let on_continue = move |_| {
        let target = auth
            .get_untracked()
            .role()
            .map_or("/login", |role| role.dashboard_path());
        navigate(target, NavigateOptions::default());
    };

    view! {
        <div class="onboarding-page">
            <div class="onboarding-card">
                <h1>"Link your socials"</h1>
                <p class="onboarding-card__subtitle">
                    "Connect the accounts you post from so businesses can see your reach."
                </p>
                <div class="socials">
                    <div class="socials__row">
                        <span class="socials__name">"Instagram"</span>
                        <Suspense fallback=|| view! { <span class="socials__state">"Checking..."</span> }>
                            {move || {
                                status.get().map(|linked| {
                                    if linked.instagram_linked {
                                        let handle = linked
                                            .instagram_username
                                            .clone()
                                            .map_or_else(|| "Linked".to_owned(), |u| format!("Linked · @{u}"));
                                        view! { <span class="socials__state socials__state--linked">{handle}</span> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <a class="btn btn--primary" href=instagram_oauth.clone()>
                                                "Link Instagram"
                                            </a>
                                        }
                                        .into_any()
                                    }
                                })
                            }}
                        </Suspense>
                    </div>
                    <div class="socials__row socials__row--soon">
                        <span class="socials__name">"Facebook"</span>
                        <span class="socials__state">"Coming soon"</span>
                    </div>
                    <div class="socials__row socials__row--soon">
                        <span class="socials__name">"YouTube"</span>
                        <span class="socials__state">"Coming soon"</span>
                    </div>
                </div>
                <button class="btn btn--primary onboarding-continue" on:click=on_continue>
                    "Continue to dashboard"
                </button>
            </div>
        </div>
    }
}
