//! HTTP server lifecycle.
//!
//! Binds the listener from configuration, serves the router with peer
//! addresses attached to each request, and drains connections on
//! SIGTERM/SIGINT so rolling updates do not cut requests short.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
