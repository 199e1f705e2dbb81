//! Session Store
//!
//! Single source of truth for "who is logged in", provided via context at
//! the tree root. Credential verification is delegated to the backend's
//! password grant; on success the issued session is persisted and the
//! profile row is fetched to populate the identity.

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, ApiError};
use crate::config;
use crate::models::{Session, StorePatch, StoreProfile, User, UserPatch};
use crate::notify::NotifyContext;
use crate::storage;

/// Session state with field-level reactivity. Invariant: `user` is set iff
/// `session` is set.
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub user: Option<User>,
    pub session: Option<Session>,
    pub store_profile: StoreProfile,
    /// True until the startup resume attempt resolves.
    pub loading: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: None,
            session: None,
            store_profile: config::default_store_profile(),
            loading: true,
        }
    }

    /// Transition `anonymous -> authenticated`.
    pub fn login_succeeded(&mut self, session: Session, user: User) {
        self.session = Some(session);
        self.user = Some(user);
    }

    /// Transition to `anonymous`, from any state.
    pub fn clear_session(&mut self) {
        self.user = None;
        self.session = None;
    }

    /// Shallow-merge into the current identity; no-op when logged out.
    /// Local only, lost on reload.
    pub fn merge_user(&mut self, patch: UserPatch) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(phone) = patch.phone {
            user.phone = phone;
        }
        if let Some(address) = patch.address {
            user.address = address;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
    }

    /// Shallow-merge into the store profile. Local only.
    pub fn merge_store(&mut self, patch: StorePatch) {
        if let Some(name) = patch.name {
            self.store_profile.name = name;
        }
        if let Some(address) = patch.address {
            self.store_profile.address = address;
        }
        if let Some(phone) = patch.phone {
            self.store_profile.phone = phone;
        }
        if let Some(email) = patch.email {
            self.store_profile.email = email;
        }
    }
}

/// Session store handle provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: Store<SessionState>,
    notify: NotifyContext,
}

impl SessionContext {
    pub fn new(notify: NotifyContext) -> Self {
        Self { state: Store::new(SessionState::new()), notify }
    }

    /// Delegate credential verification to the backend. Returns false and
    /// leaves prior state untouched on any failure.
    pub async fn login(self, email: &str, password: &str) -> bool {
        let tokens = match api::sign_in(email, password).await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("[session] sign-in failed: {e}");
                let message = match e {
                    ApiError::Status { code: 400 | 401 | 403, .. } => "Email atau password salah",
                    _ => "Terjadi kesalahan saat login",
                };
                self.notify.error(message);
                return false;
            }
        };

        let session = tokens.into_session(now_secs());
        let user = match api::fetch_profile(&session.user_id, &session.access_token).await {
            Ok(user) => user,
            Err(e) => {
                error!("[session] failed to fetch profile: {e}");
                self.notify.error("Terjadi kesalahan saat login");
                return false;
            }
        };

        log!("[session] signed in as {} ({})", user.name, user.role.label());
        storage::save_session(&session);
        self.arm_expiry_timer(&session);
        self.state.write().login_succeeded(session, user);
        self.notify.success("Login berhasil!");
        true
    }

    /// Backend sign-out is best effort; local state is cleared regardless.
    pub async fn logout(self) {
        if let Some(session) = self.state.session().get_untracked() {
            if let Err(e) = api::sign_out(&session.access_token).await {
                warn!("[session] sign-out request failed: {e}");
            }
        }
        self.clear();
        self.notify.success("Logout berhasil!");
    }

    pub fn update_user(self, patch: UserPatch) {
        self.state.write().merge_user(patch);
    }

    pub fn update_store(self, patch: StorePatch) {
        self.state.write().merge_store(patch);
    }

    /// Resume a persisted session on startup. `loading` stays true until
    /// this resolves, success or absence.
    pub async fn resume(self) {
        match storage::load_session() {
            Some(session) if !session.is_expired(now_secs()) => {
                match api::fetch_profile(&session.user_id, &session.access_token).await {
                    Ok(user) => {
                        log!("[session] resumed session for {}", user.name);
                        self.arm_expiry_timer(&session);
                        self.state.write().login_succeeded(session, user);
                    }
                    Err(e) => {
                        warn!("[session] could not resume session: {e}");
                        storage::clear_session();
                    }
                }
            }
            Some(_) => {
                log!("[session] persisted session expired, discarding");
                storage::clear_session();
            }
            None => {}
        }
        self.state.loading().set(false);
    }

    fn clear(self) {
        storage::clear_session();
        self.state.write().clear_session();
    }

    /// Drop the session when its expiry passes while the app is open. A
    /// fresh login re-arms with the new expiry, which makes the stale timer
    /// a no-op.
    fn arm_expiry_timer(self, session: &Session) {
        let expires_at = session.expires_at;
        let remaining_ms = (expires_at - now_secs()).max(0).saturating_mul(1000);
        spawn_local(async move {
            TimeoutFuture::new(u32::try_from(remaining_ms).unwrap_or(u32::MAX)).await;
            let still_current = self
                .state
                .session()
                .get_untracked()
                .is_some_and(|s| s.expires_at == expires_at);
            if still_current {
                warn!("[session] session expired");
                self.clear();
                self.notify.error("Sesi berakhir, silakan login kembali");
            }
        });
    }
}

/// Get the session context; panics when no provider is in scope.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user() -> User {
        User {
            id: "u-1".into(),
            name: "Budi".into(),
            email: "kasir@toko.com".into(),
            phone: "0812".into(),
            address: "Jakarta".into(),
            role: Role::Kasir,
        }
    }

    fn session() -> Session {
        Session {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            expires_at: 2_000,
            user_id: "u-1".into(),
        }
    }

    #[test]
    fn test_login_transition_sets_identity_and_session() {
        let mut state = SessionState::new();
        assert!(state.loading);
        state.login_succeeded(session(), user());
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Budi"));
        assert!(state.session.is_some());
    }

    #[test]
    fn test_clear_session_from_any_state() {
        let mut state = SessionState::new();
        state.clear_session();
        assert!(state.user.is_none() && state.session.is_none());

        state.login_succeeded(session(), user());
        state.clear_session();
        assert!(state.user.is_none() && state.session.is_none());
    }

    #[test]
    fn test_merge_user_is_noop_when_logged_out() {
        let mut state = SessionState::new();
        state.merge_user(UserPatch { name: Some("Siti".into()), ..Default::default() });
        assert!(state.user.is_none());
    }

    #[test]
    fn test_merge_user_only_touches_patched_fields() {
        let mut state = SessionState::new();
        state.login_succeeded(session(), user());
        state.merge_user(UserPatch {
            name: Some("Siti".into()),
            phone: Some("0856".into()),
            ..Default::default()
        });
        let merged = state.user.unwrap();
        assert_eq!(merged.name, "Siti");
        assert_eq!(merged.phone, "0856");
        assert_eq!(merged.email, "kasir@toko.com");
        assert_eq!(merged.role, Role::Kasir);
    }

    #[test]
    fn test_merge_store() {
        let mut state = SessionState::new();
        state.merge_store(StorePatch { name: Some("Toko Baru".into()), ..Default::default() });
        assert_eq!(state.store_profile.name, "Toko Baru");
        // Untouched fields keep their seed values.
        assert_eq!(state.store_profile.phone, "021-12345678");
    }
}
