use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::gateway::{dispatch, IdentityClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the UI loop until quit.
///
/// One thread owns all state; gateway calls run as spawned tasks whose
/// results come back over the event channel, so a triggered action's
/// transition and notice land before the next event is processed.
pub fn run(config: &Config, api_key: String) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(IdentityClient::new(config, api_key));

    let (mut terminal, _guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::Dispatch(call) = handle_key(&mut app, key) {
                    let client = Arc::clone(&client);
                    let tx = events.sender();
                    runtime.spawn(async move {
                        let (action, result) = dispatch(client.as_ref(), call).await;
                        let _ = tx.send(AppEvent::AuthCompleted { action, result });
                    });
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::AuthCompleted { action, result }) => {
                app.on_auth_completed(action, result);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
