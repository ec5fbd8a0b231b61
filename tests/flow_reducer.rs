use authgate::ui::flow::{FlowIntent, FlowReducer, FlowState, ViewId};
use authgate::ui::mvi::Reducer;

fn at(view: ViewId) -> FlowState {
    FlowState {
        active: view,
        sidebar_expanded: false,
    }
}

fn step(state: FlowState, intent: FlowIntent) -> FlowState {
    FlowReducer::reduce(state, intent)
}

const ALL_INTENTS: [FlowIntent; 9] = [
    FlowIntent::OpenSignup,
    FlowIntent::OpenForgotPassword,
    FlowIntent::BackToLogin,
    FlowIntent::SignInSucceeded,
    FlowIntent::SignupSucceeded,
    FlowIntent::OpenDashboard,
    FlowIntent::Logout,
    FlowIntent::ToggleSidebar,
    FlowIntent::SidebarNavigate,
];

#[test]
fn initial_view_is_login() {
    assert_eq!(FlowState::default().active, ViewId::Login);
}

#[test]
fn login_transitions() {
    assert_eq!(step(at(ViewId::Login), FlowIntent::OpenSignup).active, ViewId::Signup);
    assert_eq!(
        step(at(ViewId::Login), FlowIntent::OpenForgotPassword).active,
        ViewId::ForgotPassword
    );
    assert_eq!(
        step(at(ViewId::Login), FlowIntent::SignInSucceeded).active,
        ViewId::Profile
    );
}

#[test]
fn signup_returns_to_login_on_back_and_on_success() {
    assert_eq!(step(at(ViewId::Signup), FlowIntent::BackToLogin).active, ViewId::Login);
    assert_eq!(
        step(at(ViewId::Signup), FlowIntent::SignupSucceeded).active,
        ViewId::Login
    );
}

#[test]
fn forgot_password_returns_to_login() {
    assert_eq!(
        step(at(ViewId::ForgotPassword), FlowIntent::BackToLogin).active,
        ViewId::Login
    );
}

#[test]
fn profile_transitions() {
    assert_eq!(
        step(at(ViewId::Profile), FlowIntent::OpenDashboard).active,
        ViewId::Dashboard
    );
    assert_eq!(step(at(ViewId::Profile), FlowIntent::Logout).active, ViewId::Login);
}

#[test]
fn inapplicable_intents_are_no_ops() {
    assert_eq!(step(at(ViewId::Login), FlowIntent::BackToLogin), at(ViewId::Login));
    assert_eq!(step(at(ViewId::Signup), FlowIntent::SignInSucceeded), at(ViewId::Signup));
    assert_eq!(step(at(ViewId::Profile), FlowIntent::OpenSignup), at(ViewId::Profile));
    assert_eq!(step(at(ViewId::Dashboard), FlowIntent::Logout), at(ViewId::Dashboard));
}

#[test]
fn dashboard_is_reachable_only_from_profile() {
    for view in [ViewId::Login, ViewId::Signup, ViewId::ForgotPassword] {
        for intent in ALL_INTENTS {
            assert_ne!(
                step(at(view), intent).active,
                ViewId::Dashboard,
                "{view:?} must not reach Dashboard via {intent:?}"
            );
        }
    }
    for intent in ALL_INTENTS {
        let reaches = step(at(ViewId::Profile), intent).active == ViewId::Dashboard;
        assert_eq!(reaches, intent == FlowIntent::OpenDashboard);
    }
}

#[test]
fn machine_is_cyclic_back_to_login() {
    let mut state = FlowState::default();
    for intent in [
        FlowIntent::SignInSucceeded,
        FlowIntent::OpenDashboard,
        FlowIntent::SidebarNavigate,
    ] {
        state = step(state, intent);
    }
    assert_eq!(state.active, ViewId::Login);
}

#[test]
fn sidebar_toggles_and_collapses_on_navigation() {
    let mut state = step(at(ViewId::Profile), FlowIntent::OpenDashboard);
    assert!(!state.sidebar_expanded);
    state = step(state, FlowIntent::ToggleSidebar);
    assert!(state.sidebar_expanded);
    state = step(state, FlowIntent::ToggleSidebar);
    assert!(!state.sidebar_expanded);

    let state = step(state, FlowIntent::ToggleSidebar);
    let state = step(state, FlowIntent::SidebarNavigate);
    assert_eq!(state.active, ViewId::Login);
    assert!(!state.sidebar_expanded);
}
