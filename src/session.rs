//! Session Store
//!
//! Owns the authenticated identity and the credential lifecycle. Provided
//! once via context from `App`; this module holds the only writer of the
//! session signal, everything else reads.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::models::User;
use crate::storage;

/// `Initializing → {Authenticated, Unauthenticated}` happens exactly once,
/// at startup. After that only login/register and logout move the state.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Initializing,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Where the startup credential check lands. `None` means no credential was
/// stored and no identity request was issued.
fn resolved_state(check: Option<Result<User, ApiError>>) -> SessionState {
    match check {
        Some(Ok(user)) => SessionState::Authenticated(user),
        Some(Err(_)) | None => SessionState::Unauthenticated,
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::Initializing);
        let (error, set_error) = signal(None);
        Self {
            state,
            set_state,
            error,
            set_error,
        }
    }

    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state
    }

    /// Reactive read of the authenticated user.
    pub fn user(&self) -> Option<User> {
        self.state.get().user().cloned()
    }

    /// Last login/register failure message, for the auth forms.
    pub fn error(&self) -> ReadSignal<Option<String>> {
        self.error
    }

    /// Resolve a persisted credential into a session. Runs at most once per
    /// process; later calls are no-ops because the state has already left
    /// `Initializing`.
    pub fn initialize(self) {
        if self.state.get_untracked() != SessionState::Initializing {
            return;
        }
        if storage::stored_token().is_none() {
            self.set_state.set(resolved_state(None));
            return;
        }
        spawn_local(async move {
            let checked = api::auth::current_user().await;
            if let Err(err) = &checked {
                web_sys::console::error_1(
                    &format!("[SESSION] Stored credential rejected: {}", err).into(),
                );
                storage::clear_token();
            }
            self.set_state.set(resolved_state(Some(checked)));
        });
    }

    pub async fn login(self, email: String, password: String) -> Result<User, ApiError> {
        self.set_error.set(None);
        match api::auth::login(&email, &password).await {
            Ok(auth) => Ok(self.establish(auth)),
            Err(err) => {
                self.set_error.set(Some(err.to_string()));
                Err(err)
            }
        }
    }

    pub async fn register(
        self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, ApiError> {
        self.set_error.set(None);
        match api::auth::register(&name, &email, &password).await {
            Ok(auth) => Ok(self.establish(auth)),
            Err(err) => {
                self.set_error.set(Some(err.to_string()));
                Err(err)
            }
        }
    }

    fn establish(&self, auth: api::auth::AuthSession) -> User {
        storage::save_token(&auth.token);
        self.set_state
            .set(SessionState::Authenticated(auth.user.clone()));
        auth.user
    }

    /// Synchronous: credential gone and state downgraded before this returns.
    pub fn logout(&self) {
        storage::clear_token();
        self.set_state.set(SessionState::Unauthenticated);
    }

    /// Auth failures on protected calls expire the session; the access gate
    /// then handles the redirect. Returns true when the error was consumed.
    pub fn expire_if_unauthorized(&self, err: &ApiError) -> bool {
        if err.is_auth() {
            self.logout();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn make_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Member,
        }
    }

    #[test]
    fn no_stored_credential_resolves_to_unauthenticated() {
        assert_eq!(resolved_state(None), SessionState::Unauthenticated);
    }

    #[test]
    fn valid_credential_resolves_to_authenticated() {
        let user = make_user();
        assert_eq!(
            resolved_state(Some(Ok(user.clone()))),
            SessionState::Authenticated(user)
        );
    }

    #[test]
    fn failed_identity_check_resolves_to_unauthenticated() {
        let err = ApiError::Auth("token expired".to_string());
        assert_eq!(resolved_state(Some(Err(err))), SessionState::Unauthenticated);
    }

    #[test]
    fn state_exposes_user_only_when_authenticated() {
        assert!(SessionState::Initializing.user().is_none());
        assert!(SessionState::Unauthenticated.user().is_none());
        let state = SessionState::Authenticated(make_user());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
        assert!(state.is_authenticated());
    }
}
