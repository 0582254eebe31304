//! Email OTP verification page.
//!
//! A successful verification stores the issued token and continues into the
//! role's onboarding wizard.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::SessionState;

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();

    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let otp = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let otp_value = otp.get().trim().to_owned();
        if email_value.is_empty() || otp_value.is_empty() {
            info.set("Enter both email and the 6-digit code.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Verifying...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::net::auth_api;

                match auth_api::verify_otp(&email_value, &otp_value).await {
                    Ok(resp) => match resp.token {
                        Some(token) => {
                            session.update(|s| s.set_token(token));
                            auth.update(AuthState::reset_loading);
                            match auth_api::fetch_current_user().await {
                                Ok(user) => {
                                    let target = user.role.onboarding_path();
                                    auth.update(|a| a.resolve(user));
                                    navigate(target, NavigateOptions::default());
                                }
                                Err(err) => {
                                    auth.update(AuthState::resolve_unauthenticated);
                                    info.set(err.to_string());
                                    busy.set(false);
                                }
                            }
                        }
                        None => {
                            info.set(resp.message.unwrap_or_else(|| "Verification failed.".to_owned()));
                            busy.set(false);
                        }
                    },
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, otp_value);
        }
    };

    let on_resend = move |_| {
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            info.set("Enter an email first.".to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::auth_api::resend_otp(&email_value).await {
                    Ok(()) => info.set("A fresh code is on its way.".to_owned()),
                    Err(err) => info.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Check your email"</h1>
                <p class="auth-card__subtitle">"Enter the 6-digit code we sent you"</p>
                <form class="auth-form" on:submit=on_verify>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input auth-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <button class="btn auth-resend" on:click=on_resend disabled=move || busy.get()>
                    "Resend code"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
