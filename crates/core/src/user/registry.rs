//! User registry: registration, authentication, lookup.

use std::sync::Arc;

use financas_shared::types::UserId;

use super::error::UserError;
use super::types::{NewUser, NewUserRecord, User};
use crate::auth::CredentialVerifier;

/// Persistence contract the registry requires from the storage layer.
pub trait UserStore: Send + Sync {
    /// Persist a new user and return it with its assigned identifier.
    fn insert(
        &self,
        user: NewUserRecord,
    ) -> impl std::future::Future<Output = Result<User, UserError>> + Send;

    /// Find a user by identifier.
    fn find_by_id(
        &self,
        id: UserId,
    ) -> impl std::future::Future<Output = Result<Option<User>, UserError>> + Send;

    /// Find a user by email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, UserError>> + Send;

    /// Whether a user with this email is already registered.
    fn email_exists(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<bool, UserError>> + Send;
}

/// User registry.
///
/// Owns the two user-facing rules: email uniqueness on registration and
/// the uniform credential check on authentication. Hashing is delegated
/// to the [`CredentialVerifier`].
pub struct UserRegistry<S, V> {
    store: Arc<S>,
    verifier: V,
}

impl<S: UserStore, V: CredentialVerifier> UserRegistry<S, V> {
    /// Creates a new registry backed by the given store and verifier.
    #[must_use]
    pub fn new(store: Arc<S>, verifier: V) -> Self {
        Self { store, verifier }
    }

    /// Authenticates a user by email and secret.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::InvalidCredentials`] for an unknown email or a
    /// mismatched secret; the two cases are indistinguishable to the
    /// caller. Storage and hashing failures propagate as their own
    /// variants.
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<User, UserError> {
        let Some(user) = self.store.find_by_email(email).await? else {
            return Err(UserError::InvalidCredentials);
        };

        if self.verifier.verify(secret, &user.password_hash)? {
            Ok(user)
        } else {
            Err(UserError::InvalidCredentials)
        }
    }

    /// Registers a new user.
    ///
    /// The email uniqueness check runs first; on conflict the store's
    /// insert is never invoked. The secret is hashed before persistence.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::EmailTaken`] if the email is already
    /// registered, or a hashing/storage error.
    pub async fn register(&self, user: NewUser) -> Result<User, UserError> {
        if self.store.email_exists(&user.email).await? {
            return Err(UserError::EmailTaken);
        }

        let password_hash = self.verifier.hash(&user.secret)?;
        self.store
            .insert(NewUserRecord {
                name: user.name,
                email: user.email,
                password_hash,
            })
            .await
    }

    /// Loads a user by identifier. `Ok(None)` is the not-found outcome.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lookup fails.
    pub async fn load_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        self.store.find_by_id(id).await
    }
}
