//! Account settings page shared by both dashboards: personal info, linked
//! accounts, and password change.

use leptos::prelude::*;

use crate::components::toast;
use crate::net::profile_api;
use crate::net::types::PersonalInfo;
use crate::state::toast::ToastState;

fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Profile,
    Accounts,
    Security,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let active = RwSignal::new(Tab::Profile);

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Account Settings"</h1>
                <p>"Manage your profile, linked accounts, and security."</p>
            </header>

            <div class="tabs">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || active.get() == Tab::Profile
                    on:click=move |_| active.set(Tab::Profile)
                >
                    "Profile"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || active.get() == Tab::Accounts
                    on:click=move |_| active.set(Tab::Accounts)
                >
                    "Linked Accounts"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || active.get() == Tab::Security
                    on:click=move |_| active.set(Tab::Security)
                >
                    "Security"
                </button>
            </div>

            <Show when=move || active.get() == Tab::Profile>
                <PersonalInfoPanel/>
            </Show>
            <Show when=move || active.get() == Tab::Accounts>
                <LinkedAccountsPanel/>
            </Show>
            <Show when=move || active.get() == Tab::Security>
                <SecurityPanel/>
            </Show>
        </div>
    }
}

/// Personal information get/upsert form.
#[component]
fn PersonalInfoPanel() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let data = RwSignal::new(PersonalInfo::default());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Ok(saved) = profile_api::get_personal_info().await {
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
            toast::show_error(toasts, "Full name is required.");
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match profile_api::upsert_personal_info(&record).await {
                    Ok(_) => toast::show_success(toasts, "Personal info saved."),
                    Err(err) => toast::show_error(toasts, err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
            busy.set(false);
        }
    };

    view! {
        <section class="panel">
            <h2>"Personal Information"</h2>
            <form class="panel__form" on:submit=on_submit>
                <div class="field-row">
                    <label class="field">
                        <span class="field__label">"Full Name"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || data.get().full_name
                            on:input=move |ev| data.update(|d| d.full_name = event_target_value(&ev))
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
                </div>
                <div class="field-row">
                    <label class="field">
                        <span class="field__label">"Gender"</span>
                        <select
                            class="field__input"
                            prop:value=move || data.get().gender.unwrap_or_default()
                            on:change=move |ev| data.update(|d| d.gender = blank_to_none(event_target_value(&ev)))
                        >
                            <option value="">"Prefer not to say"</option>
                            <option value="female">"Female"</option>
                            <option value="male">"Male"</option>
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Date of Birth"</span>
                        <input
                            class="field__input"
                            type="date"
                            prop:value=move || data.get().date_of_birth.unwrap_or_default()
                            on:input=move |ev| data.update(|d| d.date_of_birth = blank_to_none(event_target_value(&ev)))
                        />
                    </label>
                </div>
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
                    "Save Changes"
                </button>
            </form>
        </section>
    }
}

/// Linked-socials status (best-effort read).
#[component]
fn LinkedAccountsPanel() -> impl IntoView {
    let status = LocalResource::new(|| profile_api::fetch_linked_socials());

    view! {
        <section class="panel">
            <h2>"Linked Accounts"</h2>
            <div class="socials">
                <div class="socials__row">
                    <span class="socials__name">"Instagram"</span>
                    <Suspense fallback=|| view! { <span class="socials__state">"Checking..."</span> }>
                        {move || {
                            status.get().map(|linked| {
                                if linked.instagram_linked {
                                    view! {
                                        <span class="socials__state socials__state--linked">"Linked"</span>
                                    }
                                    .into_any()
                                } else {
                                    view! { <span class="socials__state">"Not linked"</span> }.into_any()
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
        </section>
    }
}

/// Password change form.
#[component]
fn SecurityPanel() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current_value = current.get();
        let new_value = new.get();
        if current_value.is_empty() || new_value.is_empty() {
            toast::show_error(toasts, "Fill in both password fields.");
            return;
        }
        if new_value != confirm.get() {
            toast::show_error(toasts, "New passwords do not match.");
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::auth_api::change_password(&current_value, &new_value).await {
                    Ok(()) => {
                        toast::show_success(toasts, "Password updated.");
                        current.set(String::new());
                        new.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(err) => toast::show_error(toasts, err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current_value, new_value);
            busy.set(false);
        }
    };

    view! {
        <section class="panel">
            <h2>"Change Password"</h2>
            <form class="panel__form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Current Password"</span>
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || current.get()
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"New Password"</span>
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || new.get()
                        on:input=move |ev| new.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Confirm New Password"</span>
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Update Password"
                </button>
            </form>
        </section>
    }
}
