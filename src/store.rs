// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use log::warn;
use tokio::sync::RwLock;

use crate::{
    api::auth::{AuthResponse, Authenticator, Registration},
    error::Result,
    session::{self, Profile, ProfileUpdate},
    storage,
};

/// Single authority for "who is logged in".
///
/// Owns the in-memory session and the persisted credential pair behind
/// the shared storage handle; every other component reads identity
/// through it. There are two states, unauthenticated and authenticated,
/// with "loading" left to callers.
pub struct SessionStore {
    auth: Box<dyn Authenticator>,
    storage: storage::Shared,
    session: RwLock<Option<Profile>>,
}

impl SessionStore {
    pub fn new(auth: Box<dyn Authenticator>, storage: storage::Shared) -> Self {
        Self {
            auth,
            storage,
            session: RwLock::new(None),
        }
    }

    /// Best-effort startup hydration.
    ///
    /// A stored pair makes the identity visible immediately; the
    /// confirming profile fetch then either refreshes it or, on any
    /// rejection, purges the pair and signs the session out. Never
    /// fails and never surfaces an error: with no usable credential the
    /// store simply stays unauthenticated.
    pub async fn initialize(&self) {
        let stored = self.storage.lock().await.get().await;
        let data = match stored {
            Ok(Some(data)) if !data.token().is_empty() => data,
            Ok(Some(_)) => {
                warn!("Purging a stored credential with an empty token");
                self.purge().await;
                return;
            }
            Ok(None) => return,
            Err(e) => {
                warn!("Purging stored session data that we could not read: {}", e);
                self.purge().await;
                return;
            }
        };

        *self.session.write().await = Some(data.profile().clone());

        match self.auth.profile().await {
            Ok(user) => {
                let profile = Profile::from(user);
                self.persist(data.with_profile(profile.clone())).await;
                *self.session.write().await = Some(profile);
            }
            Err(e) => {
                warn!("Signing out, the stored credential was rejected: {}", e);
                self.purge().await;
                *self.session.write().await = None;
            }
        }
    }

    /// Exchanges credentials for a session. On success the issued token
    /// and derived identity snapshot are persisted as a pair and the
    /// store becomes authenticated; on failure nothing changes and the
    /// error carries a displayable message.
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile> {
        let response = self.auth.login(email, password).await?;
        Ok(self.install(response).await)
    }

    /// Same contract as [`login`](Self::login), against the registration
    /// endpoint.
    pub async fn register(&self, registration: Registration) -> Result<Profile> {
        let response = self.auth.register(registration).await?;
        Ok(self.install(response).await)
    }

    /// Clears the in-memory session and purges the persisted pair.
    /// Unconditional and infallible: no network call is involved, and
    /// storage trouble is logged rather than surfaced.
    pub async fn logout(&self) {
        *self.session.write().await = None;
        self.purge().await;
    }

    /// Merges the given fields into the current identity and re-persists
    /// the snapshot. Local-only: the backend never sees the edit. No-op
    /// while unauthenticated.
    pub async fn update_profile(&self, update: ProfileUpdate) {
        let profile = {
            let mut guard = self.session.write().await;
            let Some(profile) = guard.as_mut() else {
                return;
            };
            profile.apply(update);
            profile.clone()
        };

        let mut storage = self.storage.lock().await;
        match storage.get().await {
            Ok(Some(data)) => {
                if let Err(e) = storage.update(&data.with_profile(profile)).await {
                    warn!("Failed to re-persist the profile snapshot: {}", e);
                }
            }
            // No stored token to pair the snapshot with; the merge stays
            // in memory only.
            Ok(None) => {}
            Err(e) => warn!("Failed to read stored session data: {}", e),
        }
    }

    pub async fn current(&self) -> Option<Profile> {
        self.session.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    async fn install(&self, response: AuthResponse) -> Profile {
        let profile = Profile::from(response.user);
        self.persist(session::Data::new(response.token, profile.clone()))
            .await;
        *self.session.write().await = Some(profile.clone());
        profile
    }

    async fn persist(&self, data: session::Data) {
        if let Err(e) = self.storage.lock().await.update(&data).await {
            warn!("Failed to persist session credentials: {}", e);
        }
    }

    async fn purge(&self) {
        if let Err(e) = self.storage.lock().await.clear().await {
            warn!("Failed to purge stored session credentials: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::{
        error::Error,
        session::{Token, User},
        storage::Memory,
    };

    use super::*;

    struct FakeAuth {
        token: &'static str,
        user: Option<User>,
        reject_with: Option<&'static str>,
    }

    impl FakeAuth {
        fn accepting(user: User) -> Self {
            Self {
                token: "T",
                user: Some(user),
                reject_with: None,
            }
        }

        fn rejecting(message: &'static str) -> Self {
            Self {
                token: "T",
                user: None,
                reject_with: Some(message),
            }
        }

        fn respond(&self) -> Result<AuthResponse> {
            if let Some(message) = self.reject_with {
                return Err(Error::Api {
                    status: 401,
                    message: message.to_owned(),
                });
            }
            Ok(AuthResponse {
                token: Token::from(self.token),
                user: self.user.clone().expect("configured user"),
            })
        }
    }

    #[async_trait]
    impl Authenticator for FakeAuth {
        async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse> {
            self.respond()
        }

        async fn register(&self, _registration: Registration) -> Result<AuthResponse> {
            self.respond()
        }

        async fn profile(&self) -> Result<User> {
            self.respond().map(|response| response.user)
        }
    }

    fn jo() -> User {
        User {
            id: "1".to_owned(),
            name: "Jo Lee".to_owned(),
            email: "a@b.com".to_owned(),
            role: "Admin".to_owned(),
            department: None,
            avatar: None,
            last_login: None,
        }
    }

    fn store_with(auth: FakeAuth) -> (SessionStore, storage::Shared) {
        let storage = storage::shared(Memory::new());
        (
            SessionStore::new(Box::new(auth), storage.clone()),
            storage,
        )
    }

    async fn seed(storage: &storage::Shared, token: &str) {
        let data = session::Data::new(Token::from(token), Profile::from(jo()));
        storage
            .lock()
            .await
            .update(&data)
            .await
            .expect("memory storage never fails");
    }

    async fn stored(storage: &storage::Shared) -> Option<session::Data> {
        storage
            .lock()
            .await
            .get()
            .await
            .expect("memory storage never fails")
    }

    #[tokio::test]
    async fn login_synthesizes_display_fields() -> Result<()> {
        let (store, storage) = store_with(FakeAuth::accepting(jo()));

        let profile = store.login("a@b.com", "pw").await?;

        assert_eq!(profile.first_name, "Jo");
        assert_eq!(profile.last_name, "Lee");
        assert_eq!(profile.bio, "Admin at BizDash");
        assert!(store.is_authenticated().await);

        let data = stored(&storage).await.expect("pair persisted");
        assert_eq!(data.token(), &Token::from("T"));
        assert_eq!(data.profile().bio, "Admin at BizDash");
        Ok(())
    }

    #[tokio::test]
    async fn login_then_logout_leaves_nothing_behind() -> Result<()> {
        let (store, storage) = store_with(FakeAuth::accepting(jo()));

        let _profile = store.login("a@b.com", "pw").await?;
        store.logout().await;

        assert!(!store.is_authenticated().await);
        assert!(store.current().await.is_none());
        assert!(stored(&storage).await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn failed_login_changes_nothing() {
        let (store, storage) = store_with(FakeAuth::rejecting("Invalid credentials"));

        let result = store.login("a@b.com", "pw").await;

        match result {
            Err(Error::Api { message, .. }) => assert_eq!(message, "Invalid credentials"),
            _ => panic!("expected the collaborator's message to propagate"),
        }
        assert!(!store.is_authenticated().await);
        assert!(stored(&storage).await.is_none());
    }

    #[tokio::test]
    async fn register_produces_the_same_session_shape() -> Result<()> {
        let (store, _storage) = store_with(FakeAuth::accepting(jo()));

        let profile = store
            .register(Registration {
                name: "Jo Lee".to_owned(),
                email: "a@b.com".to_owned(),
                password: "pw".to_owned(),
                department: None,
            })
            .await?;

        assert_eq!(profile.first_name, "Jo");
        assert_eq!(profile.bio, "Admin at BizDash");
        assert!(store.is_authenticated().await);
        Ok(())
    }

    #[tokio::test]
    async fn update_profile_is_a_noop_when_unauthenticated() {
        let (store, storage) = store_with(FakeAuth::accepting(jo()));

        store
            .update_profile(ProfileUpdate {
                bio: Some("should not stick".to_owned()),
                ..ProfileUpdate::default()
            })
            .await;

        assert!(store.current().await.is_none());
        assert!(stored(&storage).await.is_none());
    }

    #[tokio::test]
    async fn disjoint_updates_merge_and_re_persist() -> Result<()> {
        let (store, storage) = store_with(FakeAuth::accepting(jo()));
        let _profile = store.login("a@b.com", "pw").await?;

        store
            .update_profile(ProfileUpdate {
                phone: Some("+1 555 0100".to_owned()),
                ..ProfileUpdate::default()
            })
            .await;
        store
            .update_profile(ProfileUpdate {
                bio: Some("Numbers person".to_owned()),
                ..ProfileUpdate::default()
            })
            .await;

        let current = store.current().await.expect("authenticated");
        assert_eq!(current.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(current.bio, "Numbers person");

        let data = stored(&storage).await.expect("pair persisted");
        assert_eq!(data.profile().phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(data.profile().bio, "Numbers person");
        assert_eq!(data.token(), &Token::from("T"));
        Ok(())
    }

    #[tokio::test]
    async fn hydration_rejection_purges_storage() {
        let (store, storage) = store_with(FakeAuth::rejecting("Token expired"));
        seed(&storage, "stale").await;

        store.initialize().await;

        assert!(!store.is_authenticated().await);
        assert!(stored(&storage).await.is_none());
    }

    #[tokio::test]
    async fn hydration_refreshes_the_identity() {
        let mut fresh = jo();
        fresh.role = "Director".to_owned();
        let (store, storage) = store_with(FakeAuth::accepting(fresh));
        seed(&storage, "stale").await;

        store.initialize().await;

        let current = store.current().await.expect("authenticated");
        assert_eq!(current.role, "Director");
        assert_eq!(current.bio, "Director at BizDash");

        let data = stored(&storage).await.expect("pair persisted");
        assert_eq!(data.profile().role, "Director");
    }

    #[tokio::test]
    async fn hydration_with_an_empty_token_purges() {
        let (store, storage) = store_with(FakeAuth::accepting(jo()));
        seed(&storage, "").await;

        store.initialize().await;

        assert!(!store.is_authenticated().await);
        assert!(stored(&storage).await.is_none());
    }

    #[tokio::test]
    async fn hydration_without_stored_data_stays_unauthenticated() {
        let (store, storage) = store_with(FakeAuth::accepting(jo()));

        store.initialize().await;

        assert!(!store.is_authenticated().await);
        assert!(stored(&storage).await.is_none());
    }
}
