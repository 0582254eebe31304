//! Dashboard top bar: identity display and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::SessionState;

/// Top bar shared by both dashboards.
#[component]
pub fn Topbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = move || {
        auth.get()
            .user()
            .map_or_else(|| "—".to_owned(), |u| u.name.clone())
    };

    let on_logout = move |_| {
        session.update(SessionState::clear);
        auth.update(AuthState::resolve_unauthenticated);
        navigate("/login", NavigateOptions { replace: true, ..Default::default() });
    };

    view! {
        <header class="topbar">
            <span class="topbar__spacer"></span>
            <span class="topbar__user">{display_name}</span>
            <button class="btn topbar__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
