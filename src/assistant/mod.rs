//! Interactive assistant session.
//!
//! This module provides the read-eval-print loop that feeds user input to the
//! [`Assistant`] and writes its replies back.

pub mod dispatcher;

pub use dispatcher::{Assistant, Reply};

use crate::clock::Clock;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Greeting written when a session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the assistant until the user exits or input ends.
///
/// # Arguments
/// * `assistant` - The assistant holding the contact directory
/// * `reader` - Line-oriented user input
/// * `writer` - Where prompts and replies go
/// * `prompt` - Text written before each line is read
///
/// # Returns
/// An error only if reading input or writing output fails. Input that is
/// not valid UTF-8 is answered like any other bad line.
pub async fn run_session<C, R, W>(
    assistant: &mut Assistant<C>,
    mut reader: R,
    mut writer: W,
    prompt: &str,
) -> Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    writer.write_all(format!("{}\n", WELCOME).as_bytes()).await?;

    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed");
            writer.write_all(b"\nGood bye!\n").await?;
            break;
        }

        // Undecodable bytes become U+FFFD and fall through as an unknown command
        let line = String::from_utf8_lossy(&buf);
        let reply = assistant.handle_line(line.trim());
        writer.write_all(reply.text().as_bytes()).await?;
        writer.write_all(b"\n").await?;

        if let Reply::Exit(_) = reply {
            break;
        }
    }

    writer.flush().await?;
    info!("{}", assistant.metrics().summary());
    Ok(())
}
