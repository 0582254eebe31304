//! Influencer onboarding wizard: creator profile get/upsert.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::components::toast;
use crate::net::types::InfluencerOnboarding;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::guard;

fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[component]
pub fn InfluencerOnboardingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    guard::install_redirect(auth, None, navigate.clone());

    let data = RwSignal::new(InfluencerOnboarding::default());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Ok(saved) = crate::net::onboarding_api::get_influencer().await {
                data.set(saved);
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let record = data.get();
        if record.full_name.trim().is_empty() {
            toast::show_error(toasts, "Your name is required.");
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::onboarding_api::upsert_influencer(&record).await {
                    Ok(_) => {
                        toast::show_success(toasts, "Creator profile saved.");
                        navigate("/onboarding/linksocials", NavigateOptions::default());
                    }
                    Err(err) => {
                        toast::show_error(toasts, err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    };

    view! {
        <div class="onboarding-page">
            <div class="onboarding-card">
                <h1>"Set up your creator profile"</h1>
                <form class="onboarding-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Full Name"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || data.get().full_name
                            on:input=move |ev| data.update(|d| d.full_name = event_target_value(&ev))
                        />
                    </label>
                    <div class="field-row">
                        <label class="field">
                            <span class="field__label">"Niche"</span>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Fashion, Tech, Fitness..."
                                prop:value=move || data.get().niche.unwrap_or_default()
                                on:input=move |ev| data.update(|d| d.niche = blank_to_none(event_target_value(&ev)))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Followers"</span>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="120K"
                                prop:value=move || data.get().followers.unwrap_or_default()
                                on:input=move |ev| data.update(|d| d.followers = blank_to_none(event_target_value(&ev)))
                            />
                        </label>
                    </div>
                    <label class="field">
                        <span class="field__label">"Instagram Username"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || data.get().instagram_username.unwrap_or_default()
                            on:input=move |ev| data.update(|d| d.instagram_username = blank_to_none(event_target_value(&ev)))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Bio"</span>
                        <textarea
                            class="field__input"
                            rows="3"
                            prop:value=move || data.get().bio.unwrap_or_default()
                            on:input=move |ev| data.update(|d| d.bio = blank_to_none(event_target_value(&ev)))
                        ></textarea>
                    </label>
                    <div class="field-row">
                        <label class="field">
                            <span class="field__label">"State"</span>
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || data.get().state.unwrap_or_default()
                                on:input=move |ev| data.update(|d| d.state = blank_to_none(event_target_value(&ev)))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"City"</span>
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || data.get().city.unwrap_or_default()
                                on:input=move |ev| data.update(|d| d.city = blank_to_none(event_target_value(&ev)))
                            />
                        </label>
                    </div>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save and continue"
                    </button>
                </form>
            </div>
        </div>
    }
}
