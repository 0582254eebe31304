//! Business onboarding wizard: company profile get/upsert.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::components::toast;
use crate::net::types::BusinessOnboarding;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::guard;

fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[component]
pub fn BusinessOnboardingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    guard::install_redirect(auth, None, navigate.clone());

    let data = RwSignal::new(BusinessOnboarding::default());
    let busy = RwSignal::new(false);

    // Prefill from any previously saved record; a failure just means a blank
    // first visit.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Ok(saved) = crate::net::onboarding_api::get_business().await {
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
        if record.business_name.trim().is_empty() {
            toast::show_error(toasts, "Business name is required.");
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::onboarding_api::upsert_business(&record).await {
                    Ok(_) => {
                        toast::show_success(toasts, "Business profile saved.");
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
                <h1>"Tell us about your business"</h1>
                <form class="onboarding-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Business Name"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || data.get().business_name
                            on:input=move |ev| data.update(|d| d.business_name = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Website"</span>
                        <input
                            class="field__input"
                            type="url"
                            prop:value=move || data.get().business_website.unwrap_or_default()
                            on:input=move |ev| data.update(|d| d.business_website = blank_to_none(event_target_value(&ev)))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Phone Number"</span>
                        <input
                            class="field__input"
                            type="tel"
                            prop:value=move || data.get().phone_number.unwrap_or_default()
                            on:input=move |ev| data.update(|d| d.phone_number = blank_to_none(event_target_value(&ev)))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Industry"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || data.get().industry.unwrap_or_default()
                            on:input=move |ev| data.update(|d| d.industry = blank_to_none(event_target_value(&ev)))
                        />
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
                    <label class="field">
                        <span class="field__label">"Additional Information"</span>
                        <textarea
                            class="field__input"
                            rows="3"
                            prop:value=move || data.get().additional_info.unwrap_or_default()
                            on:input=move |ev| data.update(|d| d.additional_info = blank_to_none(event_target_value(&ev)))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save and continue"
                    </button>
                </form>
            </div>
        </div>
    }
}
