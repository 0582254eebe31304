//! Post Ads page: list owned campaigns and create new ones.

use leptos::prelude::*;

use crate::components::ad_card::AdCard;
use crate::components::campaign_fields::CampaignFields;
use crate::components::modal::Modal;
use crate::components::toast;
use crate::net::ads_api;
use crate::state::campaign_form::CampaignForm;
use crate::state::toast::ToastState;

#[component]
pub fn PostAdsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ads = LocalResource::new(|| async { ads_api::fetch_ads().await });

    let show_create = RwSignal::new(false);
    let form = RwSignal::new(CampaignForm::default());
    let image_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let image_file = RwSignal::new_local(None::<web_sys::File>);

    let on_open = move |_| {
        form.set(CampaignForm::default());
        image_name.set(String::new());
        #[cfg(feature = "hydrate")]
        image_file.set(None);
        show_create.set(true);
    };
    let on_close = Callback::new(move |()| show_create.set(false));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
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
                let image = image_file.get_untracked();
                match ads_api::create_ad(&draft, image).await {
                    Ok(_) => {
                        toast::show_success(toasts, "Campaign posted.");
                        show_create.set(false);
                        ads.refetch();
                    }
                    Err(err) => toast::show_error(toasts, err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    };

    view! {
        <div class="page">
            <header class="page__header page__header--row">
                <div>
                    <h1>"Post Ads"</h1>
                    <p>"Your campaigns, visible to matching influencers."</p>
                </div>
                <button class="btn btn--primary" on:click=on_open>
                    "Create Campaign"
                </button>
            </header>

            <Suspense fallback=|| view! { <p class="page__placeholder">"Loading campaigns..."</p> }>
                {move || {
                    ads.get().map(|result| match result {
                        Ok(list) => {
                            if list.is_empty() {
                                view! {
                                    <p class="page__placeholder">"No campaigns yet — create your first one."</p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|ad| view! { <AdCard ad=ad/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                        Err(err) => view! {
                            <p class="page__error">{err.to_string()}</p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <Modal title="Create New Campaign".to_owned() on_close=on_close>
                    <form class="dialog__form" on:submit=on_submit>
                        <CampaignFields form=form/>
                        <label class="field">
                            <span class="field__label">"Campaign Image"</span>
                            <input
                                class="field__input"
                                type="file"
                                accept="image/*"
                                on:change=move |ev| {
                                    #[cfg(feature = "hydrate")]
                                    {
                                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                        let file = input.files().and_then(|files| files.get(0));
                                        image_name
                                            .set(file.as_ref().map(web_sys::File::name).unwrap_or_default());
                                        image_file.set(file);
                                    }
                                    #[cfg(not(feature = "hydrate"))]
                                    {
                                        let _ = &ev;
                                    }
                                }
                            />
                            <Show when=move || !image_name.get().is_empty()>
                                <span class="field__hint">{move || image_name.get()}</span>
                            </Show>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Create Campaign"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
