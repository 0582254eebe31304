//! Shared campaign form fieldset.
//!
//! Used by both the create-campaign modal (Post Ads) and the inline-campaign
//! half of the send-request modal, so the two flows cannot drift apart.

use leptos::prelude::*;

use crate::net::types::{CompensationMode, Platform};
use crate::state::campaign_form::CampaignForm;

/// All campaign input fields bound to a shared [`CampaignForm`] signal.
#[component]
pub fn CampaignFields(form: RwSignal<CampaignForm>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">"Campaign Name"</span>
            <input
                class="field__input"
                type="text"
                prop:value=move || form.get().name
                on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
            />
        </label>

        <fieldset class="field">
            <legend class="field__label">"Platforms"</legend>
            <div class="field__choices">
                {Platform::ALL
                    .into_iter()
                    .map(|platform| {
                        view! {
                            <label class="field__choice">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.get().has_platform(platform)
                                    on:change=move |_| form.update(|f| f.toggle_platform(platform))
                                />
                                <span>{platform.label()}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </fieldset>

        <div class="field-row">
            <label class="field">
                <span class="field__label">"Start Date"</span>
                <input
                    class="field__input"
                    type="date"
                    prop:value=move || form.get().start_date
                    on:input=move |ev| form.update(|f| f.set_start_date(event_target_value(&ev)))
                />
            </label>
            <label class="field">
                <span class="field__label">"End Date"</span>
                <input
                    class="field__input"
                    type="date"
                    prop:value=move || form.get().end_date
                    on:input=move |ev| form.update(|f| f.set_end_date(event_target_value(&ev)))
                />
            </label>
        </div>

        <label class="field">
            <span class="field__label">"Tasks (no. of posts/stories)"</span>
            <input
                class="field__input"
                type="number"
                min="1"
                prop:value=move || form.get().task_count
                on:input=move |ev| form.update(|f| f.set_task_count(event_target_value(&ev)))
            />
        </label>

        <fieldset class="field">
            <legend class="field__label">"Compensation"</legend>
            <div class="field__choices">
                <label class="field__choice">
                    <input
                        type="radio"
                        name="compensation"
                        prop:checked=move || form.get().compensation == CompensationMode::Barter
                        on:change=move |_| form.update(|f| f.set_compensation(CompensationMode::Barter))
                    />
                    <span>"Barter"</span>
                </label>
                <label class="field__choice">
                    <input
                        type="radio"
                        name="compensation"
                        prop:checked=move || form.get().compensation == CompensationMode::Paid
                        on:change=move |_| form.update(|f| f.set_compensation(CompensationMode::Paid))
                    />
                    <span>"Paid"</span>
                </label>
            </div>
        </fieldset>

        <Show when=move || form.get().compensation == CompensationMode::Paid>
            <label class="field">
                <span class="field__label">"Budget"</span>
                <input
                    class="field__input"
                    type="number"
                    min="1"
                    prop:value=move || form.get().budget
                    on:input=move |ev| form.update(|f| f.set_budget(event_target_value(&ev)))
                />
            </label>
        </Show>

        <label class="field">
            <span class="field__label">"Requirements (followers, niche)"</span>
            <input
                class="field__input"
                type="text"
                prop:value=move || form.get().requirements
                on:input=move |ev| form.update(|f| f.set_requirements(event_target_value(&ev)))
            />
        </label>

        <label class="field">
            <span class="field__label">"Campaign Description"</span>
            <textarea
                class="field__input"
                rows="4"
                prop:value=move || form.get().description
                on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
            ></textarea>
        </label>
    }
}
