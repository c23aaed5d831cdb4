//! Line-oriented session loop.
//!
//! Reads commands until the input ends or `quit` is entered, then waits for
//! any clipboard copies still in flight.

use std::time::Duration;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::status::STATUS_POLL_MILLIS;
use crate::error::DiagramError;
use crate::session::command::Command;
use crate::session::{CopyResult, Response, Session};
use crate::session::status::Status;

/// Drive `session` with commands read from `input`.
pub async fn run<R>(
    session: &mut Session,
    input: R,
    copies: &mut UnboundedReceiver<CopyResult>,
) -> Result<(), DiagramError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut ticker = tokio::time::interval(Duration::from_millis(STATUS_POLL_MILLIS));
    let mut input_open = true;

    while input_open || session.pending_copies() > 0 {
        tokio::select! {
            line = lines.next_line(), if input_open => match line? {
                Some(line) => {
                    if handle_line(session, &line).await {
                        input_open = false;
                    }
                }
                None => input_open = false,
            },
            Some(result) = copies.recv() => {
                print_status(&session.finish_copy(result));
            }
            _ = ticker.tick() => {
                if session.expire_status() {
                    debug!("[Session] Status cleared");
                }
            }
        }
    }
    Ok(())
}

/// Parse and dispatch one line. Returns true when the session should stop.
pub async fn handle_line(session: &mut Session, line: &str) -> bool {
    match Command::parse(line) {
        Ok(Some(command)) => {
            let response = session.dispatch(command).await;
            print_response(&response);
            response.quit
        }
        Ok(None) => false,
        Err(err) => {
            print_status(&Status::from(&err));
            false
        }
    }
}

fn print_response(response: &Response) {
    if let Some(output) = &response.output {
        println!("{}", output.trim_end());
    }
    if let Some(status) = &response.status {
        print_status(status);
    }
}

fn print_status(status: &Status) {
    let tag = if status.success { "ok" } else { "warning" };
    println!("[{}] {}", tag, status.message);
}
