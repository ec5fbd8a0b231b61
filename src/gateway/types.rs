use serde_json::Value;
use std::future::Future;
use thiserror::Error;

/// Email and password pair, held only for the duration of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload of a successful provider call.
///
/// `raw` carries the full response opaquely; callers only need the token and
/// user id when present (the password-reset endpoint returns neither).
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    pub session_token: Option<String>,
    pub user_id: Option<String>,
    pub raw: Value,
}

/// The two failure kinds surfaced to the controller. Both messages are shown
/// to the user verbatim; nothing is remapped or localized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network or serialization failure below the provider.
    #[error("{0}")]
    Transport(String),

    /// The provider rejected the request, e.g. `EMAIL_EXISTS`.
    #[error("{message}")]
    Provider { message: String },
}

/// Normalized outcome of any provider call.
pub type AuthResult = Result<AuthSuccess, GatewayError>;

/// Which of the three provider operations an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    SignUp,
    PasswordReset,
}

/// An outbound call described as data.
///
/// The controller produces one of these after validation passes; the runtime
/// executes it. Keeping the call as a value is what lets tests observe that
/// a failed validation dispatches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    SignIn(Credentials),
    SignUp(Credentials),
    PasswordReset { email: String },
}

impl GatewayCall {
    pub fn action(&self) -> AuthAction {
        match self {
            GatewayCall::SignIn(_) => AuthAction::SignIn,
            GatewayCall::SignUp(_) => AuthAction::SignUp,
            GatewayCall::PasswordReset { .. } => AuthAction::PasswordReset,
        }
    }
}

/// The three outbound provider operations.
///
/// Implementations never panic and never return anything other than the two
/// [`GatewayError`] kinds; transport faults are caught at this boundary.
pub trait IdentityGateway: Send + Sync {
    fn sign_up(&self, credentials: &Credentials) -> impl Future<Output = AuthResult> + Send;

    fn sign_in(&self, credentials: &Credentials) -> impl Future<Output = AuthResult> + Send;

    fn request_password_reset(&self, email: &str) -> impl Future<Output = AuthResult> + Send;
}

/// Executes a described call against a gateway implementation.
pub async fn dispatch<G: IdentityGateway>(gateway: &G, call: GatewayCall) -> (AuthAction, AuthResult) {
    let action = call.action();
    let result = match call {
        GatewayCall::SignIn(credentials) => gateway.sign_in(&credentials).await,
        GatewayCall::SignUp(credentials) => gateway.sign_up(&credentials).await,
        GatewayCall::PasswordReset { email } => gateway.request_password_reset(&email).await,
    };
    (action, result)
}
