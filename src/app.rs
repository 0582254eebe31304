//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes};

use crate::components::shell::DashboardShell;
use crate::components::site_layout::SiteLayout;
use crate::components::toast::ToastHost;
use crate::net::types::Role;
use crate::pages::legal::{CookiePolicyPage, PrivacyPolicyPage, TermsPage};
use crate::pages::login::LoginPage;
use crate::pages::onboarding::business::BusinessOnboardingPage;
use crate::pages::onboarding::influencer::InfluencerOnboardingPage;
use crate::pages::onboarding::link_socials::LinkSocialsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::pages::site::{AboutPage, ContactPage, FeaturesPage, HomePage};
use crate::pages::verify_otp::VerifyOtpPage;
use crate::pages::business::influencers::AvailableInfluencersPage;
use crate::pages::business::overview::BusinessOverviewPage;
use crate::pages::business::post_ads::PostAdsPage;
use crate::pages::business::submissions::BusinessSubmissionsPage;
use crate::pages::influencer::ads::InfluencerAdsPage;
use crate::pages::influencer::overview::InfluencerOverviewPage;
use crate::pages::influencer::requests::InfluencerRequestsPage;
use crate::pages::influencer::submissions::InfluencerSubmissionsPage;
use crate::state::auth::AuthState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the session/auth/toast contexts, resolves identity once from the
/// persisted token, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(auth);
    provide_context(toasts);

    // Resolve the initial auth phase: no token settles unauthenticated
    // immediately; otherwise the identity fetch decides. A failed fetch is
    // terminal for this load, with no retry.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if session.get_untracked().is_authenticated() {
                match crate::net::auth_api::fetch_current_user().await {
                    Ok(user) => auth.update(|a| a.resolve(user)),
                    Err(_) => auth.update(AuthState::resolve_unauthenticated),
                }
            } else {
                auth.update(AuthState::resolve_unauthenticated);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    auth.update(AuthState::resolve_unauthenticated);

    view! {
        <Title text="Collably"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=SiteLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("privacy-policy") view=PrivacyPolicyPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("cookie-policy") view=CookiePolicyPage/>
                </ParentRoute>

                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("verify-otp") view=VerifyOtpPage/>

                <Route
                    path=(StaticSegment("onboarding"), StaticSegment("business"))
                    view=BusinessOnboardingPage
                />
                <Route
                    path=(StaticSegment("onboarding"), StaticSegment("influencer"))
                    view=InfluencerOnboardingPage
                />
                <Route
                    path=(StaticSegment("onboarding"), StaticSegment("linksocials"))
                    view=LinkSocialsPage
                />

                <ParentRoute
                    path=(StaticSegment("dashboard"), StaticSegment("business"))
                    view=|| view! { <DashboardShell role=Role::Business/> }
                >
                    <Route path=StaticSegment("") view=BusinessOverviewPage/>
                    <Route path=StaticSegment("post-ads") view=PostAdsPage/>
                    <Route path=StaticSegment("influencers") view=AvailableInfluencersPage/>
                    <Route path=StaticSegment("submissions") view=BusinessSubmissionsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>

                <ParentRoute
                    path=(StaticSegment("dashboard"), StaticSegment("influencer"))
                    view=|| view! { <DashboardShell role=Role::Influencer/> }
                >
                    <Route path=StaticSegment("") view=InfluencerOverviewPage/>
                    <Route path=StaticSegment("ads") view=InfluencerAdsPage/>
                    <Route path=StaticSegment("requests") view=InfluencerRequestsPage/>
                    <Route path=StaticSegment("submissions") view=InfluencerSubmissionsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>

        <ToastHost/>
    }
}
