//! Auth flow calls: login, signup, OTP verification, identity.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::http;
#[cfg(feature = "hydrate")]
use super::http::AuthMode;
use super::types::{AuthResponse, CurrentUser, LoginPayload, SignupPayload};

/// Sign in with email + password via `POST /api/auth/login`.
pub async fn login(payload: &LoginPayload) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json("/api/auth/login", AuthMode::Public, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        http::unavailable()
    }
}

/// Register a new account via `POST /api/auth/signup`.
pub async fn signup(payload: &SignupPayload) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json("/api/auth/signup", AuthMode::Public, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        http::unavailable()
    }
}

/// Confirm the emailed code via `POST /api/auth/verify-otp`.
pub async fn verify_otp(email: &str, otp: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "otp": otp });
        http::post_json("/api/auth/verify-otp", AuthMode::Public, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, otp);
        http::unavailable()
    }
}

/// Ask for a fresh code via `POST /api/auth/resend-otp`.
pub async fn resend_otp(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let _: serde_json::Value = http::post_json("/api/auth/resend-otp", AuthMode::Public, &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        http::unavailable()
    }
}

/// Fetch the authenticated identity from `GET /api/auth/me`.
pub async fn fetch_current_user() -> Result<CurrentUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/auth/me", AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Rotate the account password via `POST /api/auth/change-password`.
pub async fn change_password(current: &str, new: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "currentPassword": current, "newPassword": new });
        let _: serde_json::Value = http::post_json("/api/auth/change-password", AuthMode::Bearer, &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new);
        http::unavailable()
    }
}
