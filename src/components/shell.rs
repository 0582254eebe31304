//! Guarded dashboard shell: sidebar + topbar + routed content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both dashboard subtrees mount through this component, which applies the
//! route guard: placeholder while identity loads, redirect to login when
//! unauthenticated, redirect to the user's own dashboard on a role mismatch,
//! and the routed subtree otherwise.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::guard::{self, GuardOutcome};

/// Layout for one role's dashboard subtree.
#[component]
pub fn DashboardShell(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    guard::install_redirect(auth, Some(role), navigate);

    view! {
        <Show
            when=move || matches!(guard::evaluate(&auth.get().phase, Some(role)), GuardOutcome::Allow)
            fallback=|| {
                view! {
                    <div class="guard-wait">
                        <p>"Loading..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-shell">
                <Sidebar role=role/>
                <div class="dashboard-shell__main">
                    <Topbar/>
                    <main class="dashboard-shell__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
