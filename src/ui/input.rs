use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::gateway::GatewayCall;
use crate::ui::app::App;
use crate::ui::flow::{FlowIntent, ViewId};

/// Action the runtime must take after a key has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Handled internally.
    None,
    /// A form passed validation; execute this call.
    Dispatch(GatewayCall),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return InputAction::None;
    }

    if is_ctrl_char(key, 't') {
        app.toggle_theme();
        return InputAction::None;
    }

    match app.view() {
        ViewId::Login => handle_login_key(app, key),
        ViewId::Signup | ViewId::ForgotPassword => handle_secondary_form_key(app, key),
        ViewId::Profile => handle_profile_key(app, key),
        ViewId::Dashboard => handle_dashboard_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) -> InputAction {
    if is_ctrl_char(key, 'n') {
        app.apply(FlowIntent::OpenSignup);
        return InputAction::None;
    }
    if is_ctrl_char(key, 'f') {
        app.apply(FlowIntent::OpenForgotPassword);
        return InputAction::None;
    }
    match key.code {
        KeyCode::F(5) => {
            app.social_login("Google");
            InputAction::None
        }
        KeyCode::F(6) => {
            app.social_login("Apple");
            InputAction::None
        }
        KeyCode::F(7) => {
            app.social_login("GitHub");
            InputAction::None
        }
        KeyCode::Esc => {
            app.dismiss_notice();
            InputAction::None
        }
        _ => edit_active_form(app, key),
    }
}

/// Signup and forgot-password: Esc walks back to login once any notice is
/// out of the way.
fn handle_secondary_form_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.code == KeyCode::Esc {
        if app.notice().is_some() {
            app.dismiss_notice();
        } else {
            app.apply(FlowIntent::BackToLogin);
        }
        return InputAction::None;
    }
    edit_active_form(app, key)
}

fn handle_profile_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('b') => app.apply(FlowIntent::OpenDashboard),
        KeyCode::Char('l') => app.apply(FlowIntent::Logout),
        KeyCode::Esc => app.dismiss_notice(),
        _ => {}
    }
    InputAction::None
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('m') => app.apply(FlowIntent::ToggleSidebar),
        KeyCode::Enter if app.sidebar_expanded() => app.apply(FlowIntent::SidebarNavigate),
        KeyCode::Esc if app.sidebar_expanded() => app.apply(FlowIntent::ToggleSidebar),
        KeyCode::Esc => app.dismiss_notice(),
        _ => {}
    }
    InputAction::None
}

fn edit_active_form(app: &mut App, key: KeyEvent) -> InputAction {
    if is_ctrl_char(key, 'r') {
        if let Some(form) = app.active_form_mut() {
            form.toggle_reveal();
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => {
            return match app.submit() {
                Some(call) => InputAction::Dispatch(call),
                None => InputAction::None,
            };
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.active_form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.active_form_mut() {
                form.focus_prev();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.active_form_mut() {
                form.backspace();
            }
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            if let Some(form) = app.active_form_mut() {
                form.insert_char(c);
            }
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
