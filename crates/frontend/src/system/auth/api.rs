use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::workflow::session::SessionContext;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Authenticate against the domain. The envelope carries its own
/// success/error status; callers inspect it.
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET helper for authenticated endpoints. The backend identifies the caller
/// by the `x-user-name`/`x-user-type` headers on every non-login request.
pub async fn fetch_with_user<T>(path: &str, session: &SessionContext) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&api_url(path))
        .header("x-user-name", &session.username)
        .header("x-user-type", session.role.code())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST helper for authenticated endpoints; same header contract as
/// [`fetch_with_user`].
pub async fn post_with_user<B, T>(path: &str, session: &SessionContext, body: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::post(&api_url(path))
        .header("x-user-name", &session.username)
        .header("x-user-type", session.role.code())
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
