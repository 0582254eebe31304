//! Public marketing layout: navbar, routed page, footer.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::state::auth::AuthState;

/// Shell for the unauthenticated marketing pages.
#[component]
pub fn SiteLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Signed-in visitors get a dashboard shortcut instead of login/signup.
    let dashboard_href = move || auth.get().role().map(|r| r.dashboard_path().to_owned());

    view! {
        <div class="site">
            <header class="site__nav">
                <a class="site__brand" href="/">"Collably"</a>
                <nav class="site__links">
                    <A href="/about">"About"</A>
                    <A href="/features">"Features"</A>
                    <A href="/contact">"Contact"</A>
                </nav>
                <div class="site__actions">
                    {move || match dashboard_href() {
                        Some(href) => view! {
                            <a class="btn btn--primary" href=href>"Dashboard"</a>
                        }
                        .into_any(),
                        None => view! {
                            <a class="btn" href="/login">"Log in"</a>
                            <a class="btn btn--primary" href="/signup">"Sign up"</a>
                        }
                        .into_any(),
                    }}
                </div>
            </header>
            <main class="site__content">
                <Outlet/>
            </main>
            <footer class="site__footer">
                <a href="/privacy-policy">"Privacy"</a>
                <a href="/terms">"Terms"</a>
                <a href="/cookie-policy">"Cookies"</a>
            </footer>
        </div>
    }
}
