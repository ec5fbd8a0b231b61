use crate::ui::mvi::Intent;

/// Navigation and completion events fed to [`super::FlowReducer`].
///
/// Each intent only applies to the view it originates from; anywhere else it
/// is a no-op, keeping the transition function total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowIntent {
    /// Sign-up link on the login view.
    OpenSignup,
    /// Forgot-password link on the login view.
    OpenForgotPassword,
    /// Back-to-login link on the signup and forgot-password views.
    BackToLogin,
    /// A sign-in call completed successfully.
    SignInSucceeded,
    /// A signup call completed successfully.
    SignupSucceeded,
    /// Back button on the profile view.
    OpenDashboard,
    /// Logout button on the profile view.
    Logout,
    /// Menu button on the dashboard.
    ToggleSidebar,
    /// Any sidebar entry; every one of them navigates back to login.
    SidebarNavigate,
}

impl Intent for FlowIntent {}
