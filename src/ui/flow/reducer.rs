use crate::ui::flow::intent::FlowIntent;
use crate::ui::flow::state::{FlowState, ViewId};
use crate::ui::mvi::Reducer;

pub struct FlowReducer;

impl Reducer for FlowReducer {
    type State = FlowState;
    type Intent = FlowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let active = match (state.active, intent) {
            (ViewId::Login, FlowIntent::OpenSignup) => ViewId::Signup,
            (ViewId::Login, FlowIntent::OpenForgotPassword) => ViewId::ForgotPassword,
            (ViewId::Login, FlowIntent::SignInSucceeded) => ViewId::Profile,
            (ViewId::Signup, FlowIntent::BackToLogin | FlowIntent::SignupSucceeded) => {
                ViewId::Login
            }
            (ViewId::ForgotPassword, FlowIntent::BackToLogin) => ViewId::Login,
            // Dashboard is reachable only from here; nothing transitions into
            // it from login or startup.
            (ViewId::Profile, FlowIntent::OpenDashboard) => ViewId::Dashboard,
            (ViewId::Profile, FlowIntent::Logout) => ViewId::Login,
            (ViewId::Dashboard, FlowIntent::ToggleSidebar) => {
                return FlowState {
                    active: ViewId::Dashboard,
                    sidebar_expanded: !state.sidebar_expanded,
                }
            }
            (ViewId::Dashboard, FlowIntent::SidebarNavigate) => ViewId::Login,
            // Intent does not apply to the active view.
            _ => return state,
        };

        FlowState {
            active,
            sidebar_expanded: false,
        }
    }
}
