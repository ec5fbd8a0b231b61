use crate::ui::mvi::UiState;

/// The five mutually exclusive screens. Exactly one is active at any time;
/// the enum makes more-than-one or zero unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewId {
    #[default]
    Login,
    Signup,
    ForgotPassword,
    Profile,
    Dashboard,
}

/// Durable UI state, mutated only through [`FlowReducer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowState {
    pub active: ViewId,
    /// Dashboard menu sidebar; meaningless outside `ViewId::Dashboard`.
    pub sidebar_expanded: bool,
}

impl UiState for FlowState {}
