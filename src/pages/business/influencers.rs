//! Available Influencers page: discovery with search, plus the send-request
//! modal (existing ad or inline campaign data).

use leptos::prelude::*;

use crate::components::campaign_fields::CampaignFields;
use crate::components::influencer_card::InfluencerCard;
use crate::components::modal::Modal;
use crate::components::toast;
use crate::net::ads_api;
use crate::net::influencers_api;
#[cfg(feature = "hydrate")]
use crate::net::requests_api;
#[cfg(feature = "hydrate")]
use crate::net::types::SendRequestPayload;
use crate::state::campaign_form::CampaignForm;
use crate::state::toast::ToastState;
use crate::util::search;

/// Which half of the send-request modal is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RequestMode {
    ExistingAd,
    NewCampaign,
}

#[component]
pub fn AvailableInfluencersPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let influencers =
        LocalResource::new(|| async { influencers_api::fetch_available_influencers().await });
    let ads = LocalResource::new(|| async { ads_api::fetch_ads().await.unwrap_or_default() });

    let query = RwSignal::new(String::new());

    // Send-request modal state.
    let target = RwSignal::new(None::<String>);
    let mode = RwSignal::new(RequestMode::ExistingAd);
    let selected_ad = RwSignal::new(String::new());
    let form = RwSignal::new(CampaignForm::default());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let attachment = RwSignal::new_local(None::<web_sys::File>);

    let on_send_request = Callback::new(move |influencer_id: String| {
        mode.set(RequestMode::ExistingAd);
        selected_ad.set(String::new());
        form.set(CampaignForm::default());
        #[cfg(feature = "hydrate")]
        attachment.set(None);
        target.set(Some(influencer_id));
    });
    let on_close = Callback::new(move |()| target.set(None));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(influencer_id) = target.get() else {
            return;
        };
        match mode.get() {
            RequestMode::ExistingAd => {
                let ad_id = selected_ad.get();
                if ad_id.is_empty() {
                    toast::show_error(toasts, "Pick one of your campaigns first.");
                    return;
                }
                busy.set(true);
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        let payload = SendRequestPayload {
                            influencer_id,
                            ad_id: Some(ad_id),
                            campaign_data: None,
                        };
                        match requests_api::send_request(&payload, None).await {
                            Ok(_) => {
                                toast::show_success(toasts, "Request sent.");
                                target.set(None);
                            }
                            Err(err) => toast::show_error(toasts, err.to_string()),
                        }
                        busy.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (influencer_id, ad_id);
                }
            }
            RequestMode::NewCampaign => {
                let draft = match form.get().validate() {
                    Ok(draft) => draft,
                    Err(err) => {
                        toast::show_error(toasts, err.to_string());
                        return;
                    }
                };
                busy.set(true);
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        let payload = SendRequestPayload {
                            influencer_id,
                            ad_id: None,
                            campaign_data: Some(draft),
                        };
                        let file = attachment.get_untracked();
                        match requests_api::send_request(&payload, file).await {
                            Ok(_) => {
                                toast::show_success(toasts, "Request sent.");
                                target.set(None);
                            }
                            Err(err) => toast::show_error(toasts, err.to_string()),
                        }
                        busy.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (influencer_id, draft);
                }
            }
        }
    };

    view! {
        <div class="page">
            <header class="page__header page__header--row">
                <div>
                    <h1>"Available Influencers"</h1>
                    <p>"Find creators and send collaboration requests."</p>
                </div>
                <input
                    class="field__input page__search"
                    type="search"
                    placeholder="Search by name or niche"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=|| view! { <p class="page__placeholder">"Loading influencers..."</p> }>
                {move || {
                    influencers.get().map(|result| match result {
                        Ok(list) => {
                            let q = query.get();
                            let visible: Vec<_> = list
                                .into_iter()
                                .filter(|i| {
                                    search::matches_any(
                                        [
                                            i.full_name.as_str(),
                                            i.niche.as_deref().unwrap_or(""),
                                            i.city.as_deref().unwrap_or(""),
                                        ],
                                        &q,
                                    )
                                })
                                .collect();
                            if visible.is_empty() {
                                view! {
                                    <p class="page__placeholder">"No influencers match that search."</p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {visible
                                            .into_iter()
                                            .map(|influencer| {
                                                view! {
                                                    <InfluencerCard
                                                        influencer=influencer
                                                        on_send_request=on_send_request
                                                    />
                                                }
                                            })
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

            <Show when=move || target.get().is_some()>
                <Modal title="Send Request".to_owned() on_close=on_close>
                    <form class="dialog__form" on:submit=on_submit>
                        <div class="dialog__tabs">
                            <button
                                class="dialog__tab"
                                class:dialog__tab--active=move || mode.get() == RequestMode::ExistingAd
                                type="button"
                                on:click=move |_| mode.set(RequestMode::ExistingAd)
                            >
                                "Use an existing campaign"
                            </button>
                            <button
                                class="dialog__tab"
                                class:dialog__tab--active=move || mode.get() == RequestMode::NewCampaign
                                type="button"
                                on:click=move |_| mode.set(RequestMode::NewCampaign)
                            >
                                "Describe a new one"
                            </button>
                        </div>

                        <Show
                            when=move || mode.get() == RequestMode::ExistingAd
                            fallback=move || {
                                view! {
                                    <CampaignFields form=form/>
                                    <label class="field">
                                        <span class="field__label">"Attachment (optional)"</span>
                                        <input
                                            class="field__input"
                                            type="file"
                                            accept="image/*"
                                            on:change=move |ev| {
                                                #[cfg(feature = "hydrate")]
                                                {
                                                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                                    attachment.set(input.files().and_then(|files| files.get(0)));
                                                }
                                                #[cfg(not(feature = "hydrate"))]
                                                {
                                                    let _ = &ev;
                                                }
                                            }
                                        />
                                    </label>
                                }
                            }
                        >
                            <label class="field">
                                <span class="field__label">"Campaign"</span>
                                <select
                                    class="field__input"
                                    prop:value=move || selected_ad.get()
                                    on:change=move |ev| selected_ad.set(event_target_value(&ev))
                                >
                                    <option value="">"Select a campaign"</option>
                                    {move || {
                                        ads.get()
                                            .map(|list| {
                                                list.into_iter()
                                                    .map(|ad| {
                                                        view! {
                                                            <option value=ad.id.clone()>{ad.campaign_name.clone()}</option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            })
                                    }}
                                </select>
                            </label>
                        </Show>

                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Send Request"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
