//! Terminal login / sign-up client.
//!
//! The binary drives a five-view authentication flow (login, signup,
//! forgot-password, profile, dashboard) against a Firebase-style identity
//! REST API. State lives in explicit reducer-driven structures so the whole
//! flow is testable without a terminal or a network.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod ui;
pub mod validate;
