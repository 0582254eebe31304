//! Track Campaign page (influencer side): submit proof and monitor status.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use leptos::prelude::*;

use crate::components::status_badge::SubmissionBadge;
use crate::components::toast;
use crate::net::requests_api;
use crate::net::submissions_api;
use crate::net::types::{CollabRequest, RequestStatus};
use crate::state::auth::AuthState;
use crate::state::submission_form::SubmissionForm;
use crate::state::toast::ToastState;

/// Campaigns the influencer can submit against: accepted requests, keyed by
/// the referenced ad when present, else by the request itself.
fn campaign_options(requests: &[CollabRequest]) -> Vec<(String, String)> {
    requests
        .iter()
        .filter(|r| r.status == RequestStatus::Accepted)
        .map(|r| match (&r.ad, &r.campaign_data) {
            (Some(ad), _) => (ad.id.clone(), ad.campaign_name.clone()),
            (None, Some(campaign)) => (r.id.clone(), campaign.campaign_name.clone()),
            (None, None) => (r.id.clone(), "Campaign".to_owned()),
        })
        .collect()
}

#[component]
pub fn InfluencerSubmissionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let requests = LocalResource::new(move || {
        let user_id = auth.get().user().map(|u| u.id.clone());
        async move {
            match user_id {
                Some(id) => requests_api::fetch_request_status(&id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });
    let submissions =
        LocalResource::new(|| async { submissions_api::fetch_my_submissions().await });

    let form = RwSignal::new(SubmissionForm::default());
    let screenshot_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let screenshot = RwSignal::new_local(None::<web_sys::File>);

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
                let file = screenshot.get_untracked();
                match submissions_api::submit_proof(&draft, file).await {
                    Ok(_) => {
                        toast::show_success(toasts, "Proof submitted.");
                        form.set(SubmissionForm::default());
                        screenshot_name.set(String::new());
                        screenshot.set(None);
                        submissions.refetch();
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
            <header class="page__header">
                <h1>"Track Campaign Submissions"</h1>
                <p>"Submit proof of posting and monitor review status."</p>
            </header>

            <section class="panel">
                <h2>"Submit Campaign Proof"</h2>
                <form class="panel__form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Campaign"</span>
                        <select
                            class="field__input"
                            prop:value=move || form.get().campaign_id
                            on:change=move |ev| form.update(|f| f.set_campaign(event_target_value(&ev)))
                        >
                            <option value="">"Select a campaign"</option>
                            {move || {
                                requests.get().map(|list| {
                                    campaign_options(&list)
                                        .into_iter()
                                        .map(|(id, name)| {
                                            view! { <option value=id>{name}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                })
                            }}
                        </select>
                    </label>

                    <div class="field">
                        <div class="field__label-row">
                            <span class="field__label">"Content Links"</span>
                            <button
                                class="btn btn--sm"
                                type="button"
                                on:click=move |_| form.update(SubmissionForm::add_link)
                            >
                                "+ Add link"
                            </button>
                        </div>
                        <For
                            each=move || form.get().links
                            key=|row| row.id.clone()
                            children=move |row| {
                                let url_id = row.id.clone();
                                let platform_id = row.id.clone();
                                let remove_id = row.id.clone();
                                view! {
                                    <div class="link-row">
                                        <input
                                            class="field__input link-row__url"
                                            type="url"
                                            placeholder="https://instagram.com/p/..."
                                            prop:value=row.url.clone()
                                            on:input=move |ev| {
                                                form.update(|f| f.set_link_url(&url_id, event_target_value(&ev)));
                                            }
                                        />
                                        <select
                                            class="field__input link-row__platform"
                                            prop:value=row.platform.clone()
                                            on:change=move |ev| {
                                                form.update(|f| {
                                                    f.set_link_platform(&platform_id, event_target_value(&ev));
                                                });
                                            }
                                        >
                                            <option>"Instagram"</option>
                                            <option>"Instagram Stories"</option>
                                            <option>"Facebook"</option>
                                            <option>"TikTok"</option>
                                            <option>"YouTube"</option>
                                        </select>
                                        <button
                                            class="btn btn--sm link-row__remove"
                                            type="button"
                                            aria-label="Remove link"
                                            on:click=move |_| form.update(|f| f.remove_link(&remove_id))
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <label class="field">
                        <span class="field__label">"Screenshot (optional)"</span>
                        <input
                            class="field__input"
                            type="file"
                            accept="image/*"
                            on:change=move |ev| {
                                #[cfg(feature = "hydrate")]
                                {
                                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                    let file = input.files().and_then(|files| files.get(0));
                                    screenshot_name
                                        .set(file.as_ref().map(web_sys::File::name).unwrap_or_default());
                                    screenshot.set(file);
                                }
                                #[cfg(not(feature = "hydrate"))]
                                {
                                    let _ = &ev;
                                }
                            }
                        />
                        <Show when=move || !screenshot_name.get().is_empty()>
                            <span class="field__hint">{move || screenshot_name.get()}</span>
                        </Show>
                    </label>

                    <label class="field">
                        <span class="field__label">"Notes (optional)"</span>
                        <textarea
                            class="field__input"
                            rows="3"
                            placeholder="Posted with all required hashtags..."
                            prop:value=move || form.get().notes
                            on:input=move |ev| form.update(|f| f.set_notes(event_target_value(&ev)))
                        ></textarea>
                    </label>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Submit Proof"
                    </button>
                </form>
            </section>

            <section class="panel">
                <h2>"Your Submissions"</h2>
                <Suspense fallback=|| view! { <p class="page__placeholder">"Loading submissions..."</p> }>
                    {move || {
                        submissions.get().map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="page__placeholder">"Nothing submitted yet."</p>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="submission-list">
                                            {list
                                                .into_iter()
                                                .map(|submission| {
                                                    view! {
                                                        <div class="submission-card">
                                                            <div class="submission-card__head">
                                                                <h3>{submission.campaign_name.clone()}</h3>
                                                                <SubmissionBadge status=submission.status/>
                                                            </div>
                                                            <div class="submission-card__links">
                                                                {submission
                                                                    .links
                                                                    .iter()
                                                                    .map(|link| {
                                                                        view! {
                                                                            <a
                                                                                href=link.url.clone()
                                                                                target="_blank"
                                                                                rel="noopener noreferrer"
                                                                            >
                                                                                {link.platform.clone()}
                                                                            </a>
                                                                        }
                                                                    })
                                                                    .collect::<Vec<_>>()}
                                                            </div>
                                                            {submission.notes.clone().map(|notes| view! {
                                                                <p class="submission-card__notes">{notes}</p>
                                                            })}
                                                        </div>
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
            </section>
        </div>
    }
}
