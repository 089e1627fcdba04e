//! Identity service trait and session types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stagelink_profile::AccountKind;

/// Metadata attached to a new account at sign-up, used by the backend to
/// seed the profile record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSeed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_kind: Option<AccountKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Authentication failure taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("email address is malformed")]
    InvalidEmail,

    #[error("password does not meet the minimum length")]
    WeakPassword,

    #[error("an account already exists for this email")]
    AlreadyRegistered,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("identity backend failed: {0}")]
    Backend(String),
}

/// The session operations the auth screens need, and nothing more.
#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        seed: ProfileSeed,
    ) -> Result<Session, IdentityError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Request a password reset. Always succeeds for well-formed emails,
    /// whether or not an account exists.
    async fn reset_password(&self, email: &str) -> Result<(), IdentityError>;
}
