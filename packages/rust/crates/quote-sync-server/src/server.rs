//! Stdio loop: read a request line, run it, write the reply line.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use quote_sync::Session;

use crate::protocol::handle_message;

/// Serve requests from stdin until EOF.
///
/// Requests are handled strictly one after another; the session is owned by
/// this loop.
pub async fn run_stdio(mut session: Session) -> Result<()> {
    let mut reader = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    tracing::info!("quote-sync server listening on stdio");

    while let Some(line) = reader.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(reply) = handle_message(&mut session, line) {
            stdout.write_all(reply.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    tracing::info!("stdin closed; shutting down");
    Ok(())
}
