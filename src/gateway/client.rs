use reqwest::Client;
use serde_json::{json, Value};
use std::future::Future;
use std::time::Duration;
use uuid::Uuid;

use crate::config::Config;
use crate::gateway::types::{AuthResult, AuthSuccess, Credentials, GatewayError, IdentityGateway};

const REDACTED: &str = "****";

/// HTTP client for a Firebase-style identity toolkit API.
///
/// The API key is appended to every request URL; endpoints and body shapes
/// follow the `accounts:*` REST surface.
pub struct IdentityClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl IdentityClient {
    pub fn new(config: &Config, api_key: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .expect("Failed to build identity client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn post(&self, endpoint: &str, body: Value) -> AuthResult {
        let request_id = Uuid::new_v4();
        let url = format!("{}/v1/{}?key={}", self.base_url, endpoint, self.api_key);
        tracing::debug!(%request_id, endpoint, "dispatching identity request");

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%request_id, error = %err, "identity request failed");
                return Err(GatewayError::Transport(err.to_string()));
            }
        };

        let payload: Value = match response.json().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(%request_id, error = %err, "identity response unreadable");
                return Err(GatewayError::Transport(err.to_string()));
            }
        };

        tracing::debug!(%request_id, payload = %redact_tokens(payload.clone()), "identity response");
        normalize_payload(payload)
    }
}

impl IdentityGateway for IdentityClient {
    fn sign_up(&self, credentials: &Credentials) -> impl Future<Output = AuthResult> + Send {
        self.post(
            "accounts:signUp",
            json!({
                "email": credentials.email,
                "password": credentials.password,
                "returnSecureToken": true,
            }),
        )
    }

    fn sign_in(&self, credentials: &Credentials) -> impl Future<Output = AuthResult> + Send {
        self.post(
            "accounts:signInWithPassword",
            json!({
                "email": credentials.email,
                "password": credentials.password,
                "returnSecureToken": true,
            }),
        )
    }

    fn request_password_reset(&self, email: &str) -> impl Future<Output = AuthResult> + Send {
        self.post(
            "accounts:sendOobCode",
            json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }),
        )
    }
}

/// Splits a provider response into the success and failure halves of
/// [`AuthResult`].
///
/// A body containing an `error` object is a provider rejection; its `message`
/// field is passed through verbatim (falling back to the error object's JSON
/// text when the field is missing). Anything else is a success carrying the
/// payload opaquely, with `idToken` / `localId` lifted out when present.
pub fn normalize_payload(payload: Value) -> AuthResult {
    if let Some(error) = payload.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(GatewayError::Provider { message });
    }

    let session_token = payload
        .get("idToken")
        .and_then(Value::as_str)
        .map(str::to_string);
    let user_id = payload
        .get("localId")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(AuthSuccess {
        session_token,
        user_id,
        raw: payload,
    })
}

/// Masks token material before it reaches the log file.
fn redact_tokens(mut payload: Value) -> Value {
    if let Some(map) = payload.as_object_mut() {
        for key in ["idToken", "refreshToken"] {
            if let Some(slot) = map.get_mut(key) {
                *slot = Value::String(REDACTED.to_string());
            }
        }
    }
    payload
}
