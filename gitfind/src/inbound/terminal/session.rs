//! Interactive line-oriented session driving a lookup flow.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use super::command::{CommandError, HELP, SessionCommand};
use super::render::render;
use crate::domain::ProfileLookupFlow;

/// Read commands from `input` until end of input or `quit`, writing views and
/// command errors to `output`.
///
/// Lookup failures are not written here; the flow reports them through its
/// notifier.
///
/// # Errors
///
/// Returns an I/O error when reading input or writing output fails.
pub async fn run_session<R, W>(
    flow: &ProfileLookupFlow,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{HELP}")?;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match SessionCommand::parse(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => apply(flow, command, output).await?,
            Err(CommandError::Empty) => {}
            Err(error) => writeln!(output, "error: {error}")?,
        }
        output.flush()?;
    }
    info!("session ended");
    Ok(())
}

async fn apply<W: Write>(
    flow: &ProfileLookupFlow,
    command: SessionCommand,
    output: &mut W,
) -> io::Result<()> {
    match command {
        SessionCommand::SetIdentifier(next) => flow.update_identifier(next),
        SessionCommand::Search => {
            let outcome = flow.trigger_lookup().await;
            debug!(?outcome, "session lookup finished");
        }
        SessionCommand::Remove(id) => {
            flow.remove_sub_resource(id);
        }
        SessionCommand::Show => {}
        SessionCommand::Help => return writeln!(output, "{HELP}"),
        SessionCommand::Quit => return Ok(()),
    }
    writeln!(output, "{}", render(&flow.view()))
}
