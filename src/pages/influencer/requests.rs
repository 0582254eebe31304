//! Campaign Requests page: accept or decline business proposals.

use leptos::prelude::*;

use crate::components::status_badge::RequestBadge;
#[cfg(feature = "hydrate")]
use crate::components::toast;
use crate::net::requests_api;
use crate::net::types::{CollabRequest, RequestStatus};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Title shown for a request: the referenced ad's name, the inline campaign
/// name, or a generic fallback.
fn request_title(request: &CollabRequest) -> String {
    if let Some(ad) = &request.ad {
        return ad.campaign_name.clone();
    }
    if let Some(campaign) = &request.campaign_data {
        return campaign.campaign_name.clone();
    }
    "Campaign proposal".to_owned()
}

#[component]
pub fn InfluencerRequestsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let requests = LocalResource::new(move || {
        let user_id = auth.get().user().map(|u| u.id.clone());
        async move {
            match user_id {
                Some(id) => requests_api::fetch_request_status(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let busy = RwSignal::new(false);

    let respond = move |request_id: String, status: RequestStatus| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match requests_api::respond_to_request(&request_id, status).await {
                    Ok(_) => {
                        let note = if status == RequestStatus::Accepted {
                            "Request accepted."
                        } else {
                            "Request declined."
                        };
                        toast::show_success(toasts, note);
                        requests.refetch();
                    }
                    Err(err) => toast::show_error(toasts, err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request_id, status, toasts);
            busy.set(false);
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Campaign Requests"</h1>
                <p>"Review and respond to collaboration requests from businesses."</p>
            </header>

            <Suspense fallback=|| view! { <p class="page__placeholder">"Loading requests..."</p> }>
                {move || {
                    requests.get().map(|result| match result {
                        Ok(list) => {
                            if list.is_empty() {
                                return view! {
                                    <p class="page__placeholder">"No requests right now."</p>
                                }
                                .into_any();
                            }
                            view! {
                                <div class="request-list">
                                    {list
                                        .into_iter()
                                        .map(|request| {
                                            let title = request_title(&request);
                                            let business = request
                                                .business_name
                                                .clone()
                                                .unwrap_or_else(|| "A business".to_owned());
                                            let message = request.message.clone();
                                            let is_pending = request.status.is_pending();
                                            let accept_id = request.id.clone();
                                            let decline_id = request.id.clone();
                                            view! {
                                                <div class="request-card">
                                                    <div class="request-card__head">
                                                        <div>
                                                            <h3>{title}</h3>
                                                            <p class="request-card__business">{business}</p>
                                                        </div>
                                                        <RequestBadge status=request.status/>
                                                    </div>
                                                    {message.map(|m| view! {
                                                        <p class="request-card__message">{m}</p>
                                                    })}
                                                    <Show when=move || is_pending>
                                                        <div class="request-card__actions">
                                                            <button
                                                                class="btn btn--primary"
                                                                on:click={
                                                                    let accept_id = accept_id.clone();
                                                                    move |_| respond(accept_id.clone(), RequestStatus::Accepted)
                                                                }
                                                            >
                                                                "Accept"
                                                            </button>
                                                            <button
                                                                class="btn"
                                                                on:click={
                                                                    let decline_id = decline_id.clone();
                                                                    move |_| respond(decline_id.clone(), RequestStatus::Declined)
                                                                }
                                                            >
                                                                "Decline"
                                                            </button>
                                                        </div>
                                                    </Show>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                        Err(err) => view! { <p class="page__error">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
