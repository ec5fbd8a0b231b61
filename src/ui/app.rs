//! The controller tying validation, the gateway and the view flow together.

use crate::gateway::{AuthAction, AuthResult, AuthSuccess, Credentials, GatewayCall};
use crate::ui::flow::{FlowIntent, FlowReducer, FlowState, ViewId};
use crate::ui::forms::{FieldId, Form};
use crate::ui::mvi::Reducer;
use crate::ui::notice::{NoticeSlot, NOTICE_TTL};
use crate::ui::theme::ThemeMode;
use crate::validate::{is_valid_email, passwords_match};

/// In-memory record of the signed-in user. Dropped on logout, never
/// persisted anywhere.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    pub user_id: Option<String>,
    pub session_token: Option<String>,
}

pub struct App {
    should_quit: bool,
    flow: FlowState,
    notice: NoticeSlot,
    login_form: Form,
    signup_form: Form,
    forgot_form: Form,
    /// The single in-flight gateway call, if any. Submits are ignored while
    /// one is pending; there is no cancellation.
    pending: Option<AuthAction>,
    session: Option<Session>,
    theme: ThemeMode,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            flow: FlowState::default(),
            notice: NoticeSlot::default(),
            login_form: Form::login(),
            signup_form: Form::signup(),
            forgot_form: Form::forgot(),
            pending: None,
            session: None,
            theme: ThemeMode::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> ViewId {
        self.flow.active
    }

    pub fn sidebar_expanded(&self) -> bool {
        self.flow.sidebar_expanded
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.current()
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice.notify(text);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.dismiss();
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn pending(&self) -> Option<AuthAction> {
        self.pending
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Runs a navigation intent through the flow reducer.
    pub fn apply(&mut self, intent: FlowIntent) {
        if matches!(intent, FlowIntent::Logout | FlowIntent::SidebarNavigate)
            && self.view() != ViewId::Login
        {
            self.session = None;
        }
        self.flow = FlowReducer::reduce(self.flow, intent);
    }

    pub fn active_form(&self) -> Option<&Form> {
        match self.flow.active {
            ViewId::Login => Some(&self.login_form),
            ViewId::Signup => Some(&self.signup_form),
            ViewId::ForgotPassword => Some(&self.forgot_form),
            ViewId::Profile | ViewId::Dashboard => None,
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self.flow.active {
            ViewId::Login => Some(&mut self.login_form),
            ViewId::Signup => Some(&mut self.signup_form),
            ViewId::ForgotPassword => Some(&mut self.forgot_form),
            ViewId::Profile | ViewId::Dashboard => None,
        }
    }

    pub fn on_tick(&mut self) {
        self.notice.expire(NOTICE_TTL);
    }

    /// Submits whatever form the active view carries.
    pub fn submit(&mut self) -> Option<GatewayCall> {
        match self.flow.active {
            ViewId::Login => self.submit_sign_in(),
            ViewId::Signup => self.submit_signup(),
            ViewId::ForgotPassword => self.submit_password_reset(),
            ViewId::Profile | ViewId::Dashboard => None,
        }
    }

    /// Validates the login form and, if it passes, describes the sign-in
    /// call to dispatch. A `None` return means no network call happens.
    pub fn submit_sign_in(&mut self) -> Option<GatewayCall> {
        if self.reject_while_pending() {
            return None;
        }
        let email = self.login_form.value(FieldId::Email);
        if !is_valid_email(email) {
            self.notice.notify("Invalid email address!");
            return None;
        }
        let credentials = Credentials {
            email: email.to_string(),
            password: self.login_form.value(FieldId::Password).to_string(),
        };
        self.pending = Some(AuthAction::SignIn);
        Some(GatewayCall::SignIn(credentials))
    }

    pub fn submit_signup(&mut self) -> Option<GatewayCall> {
        if self.reject_while_pending() {
            return None;
        }
        let email = self.signup_form.value(FieldId::Email);
        if !is_valid_email(email) {
            self.notice.notify("Invalid email address!");
            return None;
        }
        let password = self.signup_form.value(FieldId::Password);
        let confirm = self.signup_form.value(FieldId::ConfirmPassword);
        if !passwords_match(password, confirm) {
            self.notice.notify("Passwords do not match!");
            return None;
        }
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.pending = Some(AuthAction::SignUp);
        Some(GatewayCall::SignUp(credentials))
    }

    pub fn submit_password_reset(&mut self) -> Option<GatewayCall> {
        if self.reject_while_pending() {
            return None;
        }
        let email = self.forgot_form.value(FieldId::Email);
        if !is_valid_email(email) {
            self.notice.notify("Enter a valid email!");
            return None;
        }
        let email = email.to_string();
        self.pending = Some(AuthAction::PasswordReset);
        Some(GatewayCall::PasswordReset { email })
    }

    /// Applies a completed gateway call: one notice, at most one transition.
    /// Failures leave the view where it was.
    pub fn on_auth_completed(&mut self, action: AuthAction, result: AuthResult) {
        self.pending = None;
        match result {
            Ok(success) => self.on_auth_success(action, success),
            Err(err) => self.notice.notify(err.to_string()),
        }
    }

    fn on_auth_success(&mut self, action: AuthAction, success: AuthSuccess) {
        match action {
            AuthAction::SignIn => {
                self.session = Some(Session {
                    email: self.login_form.value(FieldId::Email).to_string(),
                    user_id: success.user_id,
                    session_token: success.session_token,
                });
                self.notice.notify("Login successful!");
                self.apply(FlowIntent::SignInSucceeded);
            }
            AuthAction::SignUp => {
                self.notice.notify("Signup successful!");
                self.apply(FlowIntent::SignupSucceeded);
            }
            AuthAction::PasswordReset => {
                self.notice.notify("Reset link sent to your email!");
            }
        }
    }

    /// Social providers are not wired up; the button only reports that.
    pub fn social_login(&mut self, provider: &str) {
        tracing::debug!(provider, "social login requested");
        self.notice.notify(format!("{provider} login not implemented."));
    }

    fn reject_while_pending(&mut self) -> bool {
        if let Some(action) = self.pending {
            tracing::debug!(?action, "submit ignored while a call is in flight");
            return true;
        }
        false
    }
}
