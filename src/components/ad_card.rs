//! Campaign/ad summary card.
//!
//! DESIGN
//! ======
//! Shared between the business "my ads" list and the influencer discovery
//! grid; the apply affordance only renders when a callback is supplied.

use leptos::prelude::*;

use crate::net::types::{Ad, CompensationMode};

/// A card summarizing one campaign.
#[component]
pub fn AdCard(ad: Ad, #[prop(optional)] on_apply: Option<Callback<String>>) -> impl IntoView {
    let platforms = ad
        .platforms
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ");
    let dates = format!("{} → {}", ad.start_date, ad.end_date);
    let compensation = match ad.compensation {
        CompensationMode::Paid => ad
            .budget
            .map_or_else(|| "Paid".to_owned(), |b| format!("Paid · ${b}")),
        CompensationMode::Barter => "Barter".to_owned(),
    };
    let tasks = format!("{} posts/stories", ad.task_count);
    let ad_id = ad.id.clone();
    let already_applied = ad.has_applied;

    view! {
        <div class="ad-card">
            {ad.image.clone().map(|src| view! {
                <img class="ad-card__image" src=src alt=ad.campaign_name.clone()/>
            })}
            <div class="ad-card__body">
                <h3 class="ad-card__name">{ad.campaign_name.clone()}</h3>
                <p class="ad-card__meta">{platforms}</p>
                <p class="ad-card__meta">{dates}</p>
                <p class="ad-card__meta">{tasks}</p>
                <p class="ad-card__compensation">{compensation}</p>
                {ad.requirements.clone().map(|req| view! {
                    <p class="ad-card__requirements">{req}</p>
                })}
                {ad.campaign_description.clone().map(|desc| view! {
                    <p class="ad-card__description">{desc}</p>
                })}
                {on_apply.map(|apply| view! {
                    <button
                        class="btn btn--primary ad-card__apply"
                        disabled=already_applied
                        on:click=move |_| apply.run(ad_id.clone())
                    >
                        {if already_applied { "Applied" } else { "Apply" }}
                    </button>
                })}
            </div>
        </div>
    }
}
