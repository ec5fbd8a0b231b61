pub mod app;
pub mod events;
pub mod flow;
pub mod forms;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
