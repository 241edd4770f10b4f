use contracts::workflow::session::SessionContext;
use web_sys::window;

const SESSION_TOKEN_KEY: &str = "auth_session_token";
const SESSION_CONTEXT_KEY: &str = "auth_session_context";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the client-side session token to localStorage
pub fn save_session_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_TOKEN_KEY, token);
    }
}

/// Get the client-side session token from localStorage
pub fn get_session_token() -> Option<String> {
    get_local_storage()?.get_item(SESSION_TOKEN_KEY).ok()?
}

/// Persist the normalized session context
pub fn save_session_context(session: &SessionContext) {
    if let (Some(storage), Ok(raw)) = (get_local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_CONTEXT_KEY, &raw);
    }
}

/// Load the persisted session context. A missing or corrupt blob yields
/// `None`, which the router treats as "not logged in".
pub fn get_session_context() -> Option<SessionContext> {
    let raw = get_local_storage()?.get_item(SESSION_CONTEXT_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear everything the session left behind
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
        let _ = storage.remove_item(SESSION_CONTEXT_KEY);
    }
}
