use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use authgate::gateway::{
    dispatch, AuthAction, AuthResult, AuthSuccess, Credentials, GatewayCall, GatewayError,
    IdentityGateway,
};
use authgate::ui::app::App;
use authgate::ui::flow::{FlowIntent, ViewId};
use authgate::ui::forms::FieldId;

/// Gateway double that records how many calls actually went out.
struct MockGateway {
    result: AuthResult,
    calls: AtomicUsize,
}

impl MockGateway {
    fn returning(result: AuthResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> impl Future<Output = AuthResult> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::ready(self.result.clone())
    }
}

impl IdentityGateway for MockGateway {
    fn sign_up(&self, _credentials: &Credentials) -> impl Future<Output = AuthResult> + Send {
        self.respond()
    }

    fn sign_in(&self, _credentials: &Credentials) -> impl Future<Output = AuthResult> + Send {
        self.respond()
    }

    fn request_password_reset(&self, _email: &str) -> impl Future<Output = AuthResult> + Send {
        self.respond()
    }
}

fn success() -> AuthResult {
    Ok(AuthSuccess {
        session_token: Some("tok".to_string()),
        user_id: Some("uid".to_string()),
        raw: serde_json::json!({"idToken": "tok", "localId": "uid"}),
    })
}

fn provider_error(message: &str) -> AuthResult {
    Err(GatewayError::Provider {
        message: message.to_string(),
    })
}

fn set_field(app: &mut App, id: FieldId, value: &str) {
    app.active_form_mut()
        .expect("active view has a form")
        .set_value(id, value);
}

#[test]
fn invalid_email_blocks_sign_in_dispatch() {
    let gateway = MockGateway::returning(success());
    let mut app = App::new();
    set_field(&mut app, FieldId::Email, "not-an-email");
    set_field(&mut app, FieldId::Password, "pw");

    assert_eq!(app.submit_sign_in(), None);
    assert_eq!(app.notice(), Some("Invalid email address!"));
    assert_eq!(app.view(), ViewId::Login);
    assert_eq!(gateway.call_count(), 0);
}

#[test]
fn invalid_email_blocks_signup_dispatch() {
    let gateway = MockGateway::returning(success());
    let mut app = App::new();
    app.apply(FlowIntent::OpenSignup);
    set_field(&mut app, FieldId::Email, "missing-a-dot@host");

    assert_eq!(app.submit_signup(), None);
    assert_eq!(app.notice(), Some("Invalid email address!"));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn sign_in_success_moves_login_to_profile() {
    let gateway = MockGateway::returning(success());
    let mut app = App::new();
    set_field(&mut app, FieldId::Email, "u@x.com");
    set_field(&mut app, FieldId::Password, "pw");

    let call = app.submit_sign_in().expect("valid form dispatches");
    assert_eq!(
        call,
        GatewayCall::SignIn(Credentials {
            email: "u@x.com".to_string(),
            password: "pw".to_string(),
        })
    );

    let (action, result) = dispatch(&gateway, call).await;
    app.on_auth_completed(action, result);

    assert_eq!(app.view(), ViewId::Profile);
    assert_eq!(app.notice(), Some("Login successful!"));
    assert_eq!(gateway.call_count(), 1);

    let session = app.session().expect("session recorded");
    assert_eq!(session.email, "u@x.com");
    assert_eq!(session.user_id.as_deref(), Some("uid"));
}

#[tokio::test]
async fn signup_provider_error_keeps_view_and_surfaces_message_verbatim() {
    let gateway = MockGateway::returning(provider_error("EMAIL_EXISTS"));
    let mut app = App::new();
    app.apply(FlowIntent::OpenSignup);
    set_field(&mut app, FieldId::Email, "u@x.com");
    set_field(&mut app, FieldId::Password, "pw");
    set_field(&mut app, FieldId::ConfirmPassword, "pw");

    let call = app.submit_signup().expect("valid form dispatches");
    let (action, result) = dispatch(&gateway, call).await;
    app.on_auth_completed(action, result);

    assert_eq!(app.view(), ViewId::Signup);
    assert_eq!(app.notice(), Some("EMAIL_EXISTS"));
    assert!(app.session().is_none());
}

#[test]
fn password_mismatch_blocks_signup_end_to_end() {
    let gateway = MockGateway::returning(success());
    let mut app = App::new();
    app.apply(FlowIntent::OpenSignup);
    set_field(&mut app, FieldId::Email, "u@x.com");
    set_field(&mut app, FieldId::Password, "p1");
    set_field(&mut app, FieldId::ConfirmPassword, "p2");

    assert_eq!(app.submit_signup(), None);
    assert_eq!(app.notice(), Some("Passwords do not match!"));
    assert_eq!(app.view(), ViewId::Signup);
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn signup_success_returns_to_login() {
    let gateway = MockGateway::returning(success());
    let mut app = App::new();
    app.apply(FlowIntent::OpenSignup);
    set_field(&mut app, FieldId::Email, "new@x.com");
    set_field(&mut app, FieldId::Password, "pw");
    set_field(&mut app, FieldId::ConfirmPassword, "pw");

    let call = app.submit_signup().expect("valid form dispatches");
    let (action, result) = dispatch(&gateway, call).await;
    app.on_auth_completed(action, result);

    assert_eq!(app.view(), ViewId::Login);
    assert_eq!(app.notice(), Some("Signup successful!"));
}

#[tokio::test]
async fn password_reset_success_stays_on_forgot_view() {
    let gateway = MockGateway::returning(Ok(AuthSuccess {
        session_token: None,
        user_id: None,
        raw: serde_json::json!({"email": "u@x.com"}),
    }));
    let mut app = App::new();
    app.apply(FlowIntent::OpenForgotPassword);
    set_field(&mut app, FieldId::Email, "u@x.com");

    let call = app.submit_password_reset().expect("valid form dispatches");
    assert_eq!(
        call,
        GatewayCall::PasswordReset {
            email: "u@x.com".to_string()
        }
    );
    let (action, result) = dispatch(&gateway, call).await;
    app.on_auth_completed(action, result);

    assert_eq!(app.view(), ViewId::ForgotPassword);
    assert_eq!(app.notice(), Some("Reset link sent to your email!"));
}

#[test]
fn reset_with_invalid_email_uses_its_own_message() {
    let mut app = App::new();
    app.apply(FlowIntent::OpenForgotPassword);
    set_field(&mut app, FieldId::Email, "nope");

    assert_eq!(app.submit_password_reset(), None);
    assert_eq!(app.notice(), Some("Enter a valid email!"));
}

#[test]
fn transport_error_text_is_surfaced_verbatim() {
    let mut app = App::new();
    set_field(&mut app, FieldId::Email, "u@x.com");
    let call = app.submit_sign_in();
    assert!(call.is_some());

    app.on_auth_completed(
        AuthAction::SignIn,
        Err(GatewayError::Transport("connection reset by peer".to_string())),
    );
    assert_eq!(app.notice(), Some("connection reset by peer"));
    assert_eq!(app.view(), ViewId::Login);
}

#[test]
fn second_submit_is_ignored_while_call_is_pending() {
    let mut app = App::new();
    set_field(&mut app, FieldId::Email, "u@x.com");
    set_field(&mut app, FieldId::Password, "pw");

    assert!(app.submit_sign_in().is_some());
    assert_eq!(app.pending(), Some(AuthAction::SignIn));
    // Still pending: nothing new goes out.
    assert_eq!(app.submit_sign_in(), None);

    app.on_auth_completed(AuthAction::SignIn, success());
    assert_eq!(app.pending(), None);
}

#[test]
fn logout_drops_the_session() {
    let mut app = App::new();
    set_field(&mut app, FieldId::Email, "u@x.com");
    assert!(app.submit_sign_in().is_some());
    app.on_auth_completed(AuthAction::SignIn, success());
    assert!(app.session().is_some());

    app.apply(FlowIntent::Logout);
    assert_eq!(app.view(), ViewId::Login);
    assert!(app.session().is_none());
}

#[test]
fn notification_replacement_is_last_writer_wins() {
    let mut app = App::new();
    app.notify("A");
    app.notify("B");
    assert_eq!(app.notice(), Some("B"));
    app.dismiss_notice();
    assert_eq!(app.notice(), None);
}
