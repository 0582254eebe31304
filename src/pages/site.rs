//! Public marketing pages.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Where brands and creators meet"</h1>
            <p>
                "Collably connects businesses running campaigns with influencers "
                "looking for their next collaboration."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="/signup">"Get started"</a>
                <a class="btn" href="/features">"See features"</a>
            </div>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page-copy">
            <h1>"About"</h1>
            <p>
                "Collably is a two-sided marketplace: businesses post campaigns and "
                "send collaboration requests, influencers discover campaigns and "
                "submit proof of posting."
            </p>
        </section>
    }
}

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <section class="page-copy">
            <h1>"Features"</h1>
            <ul class="feature-list">
                <li>"Campaign posting with barter or paid compensation"</li>
                <li>"Influencer discovery with niche filtering"</li>
                <li>"Direct collaboration requests"</li>
                <li>"Proof-of-posting submissions with review"</li>
            </ul>
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page-copy">
            <h1>"Contact"</h1>
            <p>"Reach us at " <a href="mailto:hello@collably.example">"hello@collably.example"</a></p>
        </section>
    }
}
