//! Dashboard sidebar navigation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;

fn items(role: Role) -> Vec<(&'static str, String)> {
    let root = role.dashboard_path();
    match role {
        Role::Business => vec![
            ("Overview", root.to_owned()),
            ("Post Ads", format!("{root}/post-ads")),
            ("Influencers", format!("{root}/influencers")),
            ("Submissions", format!("{root}/submissions")),
            ("Profile", format!("{root}/profile")),
        ],
        Role::Influencer => vec![
            ("Overview", root.to_owned()),
            ("Campaigns", format!("{root}/ads")),
            ("Requests", format!("{root}/requests")),
            ("Submissions", format!("{root}/submissions")),
            ("Profile", format!("{root}/profile")),
        ],
    }
}

/// Vertical navigation for the active role's dashboard subtree.
#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/">"Collably"</a>
            <nav class="sidebar__nav">
                {items(role)
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <A href=href exact=true>
                                {label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
