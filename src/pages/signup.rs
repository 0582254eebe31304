//! Signup page with role selection, continuing into OTP verification.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;

#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Influencer);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            info.set("Fill in name, email, and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::net::auth_api;
                use crate::net::types::SignupPayload;

                let payload = SignupPayload {
                    name: name_value,
                    email: email_value.clone(),
                    password: password_value,
                    role: role.get_untracked(),
                };
                match auth_api::signup(&payload).await {
                    Ok(_) => {
                        navigate(
                            &format!("/verify-otp?email={email_value}"),
                            NavigateOptions::default(),
                        );
                    }
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <fieldset class="auth-roles">
                        <legend>"I am a..."</legend>
                        <label class="auth-role">
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || role.get() == Role::Influencer
                                on:change=move |_| role.set(Role::Influencer)
                            />
                            <span>"Creator / Influencer"</span>
                        </label>
                        <label class="auth-role">
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || role.get() == Role::Business
                                on:change=move |_| role.set(Role::Business)
                            />
                            <span>"Business"</span>
                        </label>
                    </fieldset>
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
