use contracts::enums::UserRole;
use contracts::workflow::session::SessionContext;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session_token: Option<String>,
    pub session: Option<SessionContext>,
}

/// Restores the persisted session, if any. A corrupt blob comes back as
/// `None` from storage and therefore lands on the login screen.
fn restore_auth_state() -> AuthState {
    match (storage::get_session_token(), storage::get_session_context()) {
        (Some(token), Some(session)) => AuthState {
            session_token: Some(token),
            session: Some(session),
        },
        _ => {
            storage::clear_session();
            AuthState::default()
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = create_signal(restore_auth_state());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Check if user is admin
pub fn is_admin() -> bool {
    let (auth_state, _) = use_auth();
    auth_state
        .get()
        .session
        .as_ref()
        .map(|s| s.is_admin())
        .unwrap_or(false)
}

/// Performs the login round-trip and persists the normalized session.
///
/// Accounts the directory flags as `NO_ACCESS` are rejected here, before
/// anything is persisted. The returned context is what the caller feeds into
/// the auth signal.
pub async fn do_login(username: String, password: String) -> Result<SessionContext, String> {
    let response = api::login(username, password).await?;

    if response.status != "success" {
        return Err(response
            .message
            .unwrap_or_else(|| "Usuário ou senha inválidos".to_string()));
    }
    let Some(user) = response.user else {
        return Err("Usuário ou senha inválidos".to_string());
    };
    if user.user_type == UserRole::NoAccess {
        return Err("Acesso negado ao sistema".to_string());
    }

    // Normalize once; every screen reads this context, nobody re-derives
    // roles from groups again.
    let session = SessionContext::from_user(&user);
    let token = format!("auth-token-{}", Uuid::new_v4());

    storage::save_session_token(&token);
    storage::save_session_context(&session);

    // Give localStorage a beat before the authenticated shell swaps in.
    TimeoutFuture::new(100).await;

    Ok(session)
}

/// Drops the persisted session and resets the auth signal.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
