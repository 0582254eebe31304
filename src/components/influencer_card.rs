//! Influencer profile card for business-side discovery.

use leptos::prelude::*;

use crate::net::types::InfluencerSummary;

/// A card summarizing one influencer, with a send-request action.
#[component]
pub fn InfluencerCard(
    influencer: InfluencerSummary,
    on_send_request: Callback<String>,
) -> impl IntoView {
    let location = [influencer.city.clone(), influencer.state.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    let followers = influencer.followers.clone().unwrap_or_else(|| "0".to_owned());
    let niche = influencer.niche.clone().unwrap_or_default();
    let reach = influencer.instagram_reach;
    let instagram = influencer.instagram_username.clone();
    let influencer_id = influencer.id.clone();

    view! {
        <div class="influencer-card">
            {influencer.profile_image_url.clone().map(|src| view! {
                <img class="influencer-card__avatar" src=src alt=influencer.full_name.clone()/>
            })}
            <h3 class="influencer-card__name">{influencer.full_name.clone()}</h3>
            {if location.is_empty() {
                view! { <p class="influencer-card__meta influencer-card__meta--missing">"Unknown location"</p> }.into_any()
            } else {
                view! { <p class="influencer-card__meta">{location}</p> }.into_any()
            }}
            <p class="influencer-card__meta">{format!("{followers} followers")}</p>
            {reach.map(|r| view! {
                <p class="influencer-card__meta">{format!("Reach (day): {r}")}</p>
            })}
            <Show when={
                let niche = niche.clone();
                move || !niche.is_empty()
            }>
                <p class="influencer-card__niche">{niche.clone()}</p>
            </Show>
            {instagram.map(|handle| {
                let href = format!("https://instagram.com/{handle}");
                view! {
                    <a class="influencer-card__handle" href=href target="_blank" rel="noopener noreferrer">
                        {format!("@{handle}")}
                    </a>
                }
            })}
            <button
                class="btn btn--primary influencer-card__request"
                on:click=move |_| on_send_request.run(influencer_id.clone())
            >
                "Send Request"
            </button>
        </div>
    }
}
