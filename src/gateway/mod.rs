//! Identity provider gateway: the seam between network I/O and UI state.
//!
//! All three provider operations normalize into one [`AuthResult`] shape so
//! the controller has a single success-or-failure branch to handle.

mod client;
mod types;

pub use client::{normalize_payload, IdentityClient};
pub use types::{
    dispatch, AuthAction, AuthResult, AuthSuccess, Credentials, GatewayCall, GatewayError,
    IdentityGateway,
};
