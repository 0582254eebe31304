//! Track Campaign page (business side): review influencer submissions.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::status_badge::SubmissionBadge;
use crate::components::toast;
use crate::net::submissions_api;
use crate::net::types::SubmissionStatus;
use crate::state::toast::ToastState;

#[component]
pub fn BusinessSubmissionsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let submissions =
        LocalResource::new(|| async { submissions_api::fetch_business_submissions().await });

    // Rejection modal state.
    let rejecting = RwSignal::new(None::<String>);
    let reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_approve = move |submission_id: String| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match submissions_api::review_submission(
                    &submission_id,
                    SubmissionStatus::Approved,
                    None,
                )
                .await
                {
                    Ok(_) => {
                        toast::show_success(toasts, "Submission approved.");
                        submissions.refetch();
                    }
                    Err(err) => toast::show_error(toasts, err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission_id;
            busy.set(false);
        }
    };

    let on_close_reject = Callback::new(move |()| {
        rejecting.set(None);
        reason.set(String::new());
    });

    let on_reject_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(submission_id) = rejecting.get() else {
            return;
        };
        let reason_value = reason.get().trim().to_owned();
        if reason_value.is_empty() {
            toast::show_error(toasts, "Please provide a reason for rejection.");
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match submissions_api::review_submission(
                    &submission_id,
                    SubmissionStatus::Rejected,
                    Some(&reason_value),
                )
                .await
                {
                    Ok(_) => {
                        toast::show_success(toasts, "Submission rejected.");
                        rejecting.set(None);
                        reason.set(String::new());
                        submissions.refetch();
                    }
                    Err(err) => toast::show_error(toasts, err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission_id, reason_value);
            busy.set(false);
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Track Campaign Submissions"</h1>
                <p>"Review influencer proof-of-posting for your campaigns."</p>
            </header>

            <Suspense fallback=|| view! { <p class="page__placeholder">"Loading submissions..."</p> }>
                {move || {
                    submissions.get().map(|result| match result {
                        Ok(list) => {
                            if list.is_empty() {
                                return view! {
                                    <p class="page__placeholder">"No submissions yet."</p>
                                }
                                .into_any();
                            }
                            let pending =
                                list.iter().filter(|s| s.status == SubmissionStatus::Pending).count();
                            view! {
                                <div class="submissions">
                                <p class="page__summary">
                                    {format!("{} total · {pending} awaiting review", list.len())}
                                </p>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Influencer"</th>
                                            <th>"Campaign"</th>
                                            <th>"Links"</th>
                                            <th>"Submitted"</th>
                                            <th>"Status"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|submission| {
                                                let id = submission.id.clone();
                                                let approve_id = id.clone();
                                                let reject_id = id.clone();
                                                let is_pending = submission.status.is_pending();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {submission
                                                                .influencer_name
                                                                .clone()
                                                                .unwrap_or_else(|| "—".to_owned())}
                                                        </td>
                                                        <td>{submission.campaign_name.clone()}</td>
                                                        <td>
                                                            {submission
                                                                .links
                                                                .iter()
                                                                .map(|link| {
                                                                    view! {
                                                                        <a
                                                                            class="data-table__link"
                                                                            href=link.url.clone()
                                                                            target="_blank"
                                                                            rel="noopener noreferrer"
                                                                        >
                                                                            {link.platform.clone()}
                                                                        </a>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </td>
                                                        <td>
                                                            {submission
                                                                .submitted_at
                                                                .clone()
                                                                .unwrap_or_else(|| "—".to_owned())}
                                                        </td>
                                                        <td><SubmissionBadge status=submission.status/></td>
                                                        <td>
                                                            <div class="data-table__actions">
                                                                <button
                                                                    class="btn btn--primary btn--sm"
                                                                    disabled=!is_pending
                                                                    on:click=move |_| on_approve(approve_id.clone())
                                                                >
                                                                    "Approve"
                                                                </button>
                                                                <button
                                                                    class="btn btn--sm"
                                                                    disabled=!is_pending
                                                                    on:click=move |_| rejecting.set(Some(reject_id.clone()))
                                                                >
                                                                    "Reject"
                                                                </button>
                                                            </div>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                                </div>
                            }
                            .into_any()
                        }
                        Err(err) => view! { <p class="page__error">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>

            <Show when=move || rejecting.get().is_some()>
                <Modal title="Reject Submission".to_owned() on_close=on_close_reject>
                    <form class="dialog__form" on:submit=on_reject_submit>
                        <label class="field">
                            <span class="field__label">"Reason"</span>
                            <textarea
                                class="field__input"
                                rows="4"
                                placeholder="What needs to change?"
                                prop:value=move || reason.get()
                                on:input=move |ev| reason.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| on_close_reject.run(())>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Reject"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
