//! Available Campaigns page: discovery with search + niche filtering and a
//! one-click apply.

use leptos::prelude::*;

use crate::components::ad_card::AdCard;
#[cfg(feature = "hydrate")]
use crate::components::toast;
#[cfg(feature = "hydrate")]
use crate::net::ads_api;
use crate::net::requests_api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::search;

#[component]
pub fn InfluencerAdsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let ads = LocalResource::new(move || {
        let user_id = auth.get().user().map(|u| u.id.clone());
        async move {
            match user_id {
                Some(id) => requests_api::fetch_available_ads(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let query = RwSignal::new(String::new());
    let niche = RwSignal::new(String::new());

    let on_apply = Callback::new(move |ad_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match ads_api::apply_to_ad(&ad_id).await {
                    Ok(_) => {
                        toast::show_success(toasts, "Applied to campaign.");
                        ads.refetch();
                    }
                    Err(err) => toast::show_error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ad_id, toasts);
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Available Campaigns"</h1>
                <p>"Discover and apply for campaigns that match your profile."</p>
            </header>

            <div class="filter-bar">
                <input
                    class="field__input"
                    type="search"
                    placeholder="Search campaigns"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <input
                    class="field__input"
                    type="search"
                    placeholder="Niche (e.g. fitness)"
                    prop:value=move || niche.get()
                    on:input=move |ev| niche.set(event_target_value(&ev))
                />
            </div>

            <Suspense fallback=|| view! { <p class="page__placeholder">"Loading campaigns..."</p> }>
                {move || {
                    ads.get().map(|result| match result {
                        Ok(list) => {
                            let q = query.get();
                            let n = niche.get();
                            let visible: Vec<_> = list
                                .into_iter()
                                .filter(|ad| {
                                    search::matches_any(
                                        [
                                            ad.campaign_name.as_str(),
                                            ad.campaign_description.as_deref().unwrap_or(""),
                                        ],
                                        &q,
                                    ) && search::matches_query(
                                        ad.requirements.as_deref().unwrap_or(""),
                                        &n,
                                    )
                                })
                                .collect();
                            if visible.is_empty() {
                                view! {
                                    <p class="page__placeholder">"No campaigns match those filters."</p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {visible
                                            .into_iter()
                                            .map(|ad| view! { <AdCard ad=ad on_apply=on_apply/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                        Err(err) => view! { <p class="page__error">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
