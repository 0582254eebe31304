//! Legal boilerplate pages.

use leptos::prelude::*;

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <section class="page-copy">
            <h1>"Privacy Policy"</h1>
            <p>"We store only the account data needed to run the platform."</p>
        </section>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <section class="page-copy">
            <h1>"Terms of Service"</h1>
            <p>"Use of Collably is subject to these terms."</p>
        </section>
    }
}

#[component]
pub fn CookiePolicyPage() -> impl IntoView {
    view! {
        <section class="page-copy">
            <h1>"Cookie Policy"</h1>
            <p>"A session cookie and one localStorage token keep you signed in."</p>
        </section>
    }
}
