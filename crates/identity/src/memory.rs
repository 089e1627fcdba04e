//! In-memory identity backend for tests and local previews.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use stagelink_profile::validation::validate_email;

use crate::service::{IdentityError, IdentityService, ProfileSeed, Session};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    password: String,
    seed: ProfileSeed,
}

/// Map-backed [`IdentityService`] with a single active session.
#[derive(Debug, Default)]
pub struct InMemoryIdentity {
    accounts: Mutex<HashMap<String, Account>>,
    current: Mutex<Option<Session>>,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.current.lock().ok().and_then(|s| s.clone())
    }

    /// The profile seed captured at sign-up, used by the backend's profile
    /// bootstrap.
    pub fn profile_seed(&self, email: &str) -> Option<ProfileSeed> {
        self.accounts
            .lock()
            .ok()
            .and_then(|accounts| accounts.get(email).map(|a| a.seed.clone()))
    }

    fn check_credentials(email: &str, password: &str) -> Result<(), IdentityError> {
        validate_email(email).map_err(|_| IdentityError::InvalidEmail)?;
        if password.len() < MIN_PASSWORD_LEN {
            return Err(IdentityError::WeakPassword);
        }
        Ok(())
    }

    fn lock_err() -> IdentityError {
        IdentityError::Backend("identity store lock poisoned".to_string())
    }
}

#[async_trait]
impl IdentityService for InMemoryIdentity {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        seed: ProfileSeed,
    ) -> Result<Session, IdentityError> {
        Self::check_credentials(email, password)?;

        let mut accounts = self.accounts.lock().map_err(|_| Self::lock_err())?;
        if accounts.contains_key(email) {
            return Err(IdentityError::AlreadyRegistered);
        }
        accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                seed,
            },
        );

        let session = Session {
            email: email.to_string(),
            signed_in_at: Utc::now(),
        };
        *self.current.lock().map_err(|_| Self::lock_err())? = Some(session.clone());
        tracing::debug!(email, "account created");
        Ok(session)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let accounts = self.accounts.lock().map_err(|_| Self::lock_err())?;
        let matches = accounts
            .get(email)
            .is_some_and(|account| account.password == password);
        if !matches {
            return Err(IdentityError::InvalidCredentials);
        }

        let session = Session {
            email: email.to_string(),
            signed_in_at: Utc::now(),
        };
        *self.current.lock().map_err(|_| Self::lock_err())? = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        *self.current.lock().map_err(|_| Self::lock_err())? = None;
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), IdentityError> {
        validate_email(email).map_err(|_| IdentityError::InvalidEmail)?;
        // Reset mail dispatch is the real backend's concern; the stub only
        // validates the request shape.
        tracing::debug!(email, "password reset requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagelink_profile::AccountKind;

    fn seed() -> ProfileSeed {
        ProfileSeed {
            account_kind: Some(AccountKind::Individual),
            first_name: Some("Jean".to_string()),
            last_name: Some("Dupont".to_string()),
        }
    }

    #[tokio::test]
    async fn sign_up_then_sign_in_round_trip() {
        let identity = InMemoryIdentity::new();
        identity
            .sign_up("jean@example.fr", "s3cret!", seed())
            .await
            .unwrap();

        identity.sign_out().await.unwrap();
        assert_eq!(identity.current_session(), None);

        let session = identity.sign_in("jean@example.fr", "s3cret!").await.unwrap();
        assert_eq!(session.email, "jean@example.fr");
        assert!(identity.current_session().is_some());
        assert_eq!(
            identity.profile_seed("jean@example.fr").unwrap().account_kind,
            Some(AccountKind::Individual)
        );
    }

    #[tokio::test]
    async fn duplicate_sign_up_is_a_conflict() {
        let identity = InMemoryIdentity::new();
        identity
            .sign_up("jean@example.fr", "s3cret!", seed())
            .await
            .unwrap();

        let err = identity
            .sign_up("jean@example.fr", "0thers3cret", seed())
            .await
            .unwrap_err();
        assert_eq!(err, IdentityError::AlreadyRegistered);
    }

    #[tokio::test]
    async fn weak_passwords_and_bad_emails_are_rejected() {
        let identity = InMemoryIdentity::new();
        assert_eq!(
            identity.sign_up("jean@example.fr", "abc", seed()).await,
            Err(IdentityError::WeakPassword)
        );
        assert_eq!(
            identity.sign_up("not-an-email", "s3cret!", seed()).await,
            Err(IdentityError::InvalidEmail)
        );
    }

    #[tokio::test]
    async fn wrong_credentials_are_indistinguishable() {
        let identity = InMemoryIdentity::new();
        identity
            .sign_up("jean@example.fr", "s3cret!", seed())
            .await
            .unwrap();

        let wrong_password = identity
            .sign_in("jean@example.fr", "wrong")
            .await
            .unwrap_err();
        let unknown_user = identity.sign_in("nobody@example.fr", "s3cret!").await.unwrap_err();
        assert_eq!(wrong_password, IdentityError::InvalidCredentials);
        assert_eq!(unknown_user, IdentityError::InvalidCredentials);
    }

    #[tokio::test]
    async fn reset_password_only_checks_the_email_shape() {
        let identity = InMemoryIdentity::new();
        identity.reset_password("anyone@example.fr").await.unwrap();
        assert_eq!(
            identity.reset_password("garbage").await,
            Err(IdentityError::InvalidEmail)
        );
    }
}
