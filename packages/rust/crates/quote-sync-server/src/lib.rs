//! quote-sync-server - stdio transport for the quote-sync engine
//!
//! Speaks newline-delimited JSON: one request envelope per input line, one
//! reply per request that carries an `id`. See [`protocol`] for the method
//! table.

pub mod protocol;
mod server;

pub use protocol::{Request, Response, ResponseError, dispatch_request, handle_message};
pub use server::run_stdio;
