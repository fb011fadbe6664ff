//! Interactive session: one ISBN per input line, newest search wins.

use crate::config::Config;
use crate::ebay::{EbayClient, SoldListingSource};
use crate::format::Formatter;
use crate::worker::{SearchWorker, WorkerMessage, WorkerUpdate};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

/// Counters for a finished session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub submitted: usize,
    pub completed: usize,
    /// Messages dropped because a newer search had been submitted
    pub stale: usize,
}

pub struct InteractiveCommand {
    config: Config,
}

impl InteractiveCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads ISBNs from stdin until EOF. Results go to stdout, status lines to stderr.
    pub async fn execute(&self) -> Result<SessionStats> {
        let client = EbayClient::new(&self.config).await.context("Failed to create HTTP client")?;
        let (worker, mut rx) = SearchWorker::new(client);

        eprintln!("Enter an ISBN per line (Ctrl-D to quit).");

        run_session(
            &worker,
            &mut rx,
            BufReader::new(tokio::io::stdin()),
            &Formatter::new(self.config.format),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
        .await
    }
}

/// Drives a session until input ends and the newest search has finished.
///
/// Every non-blank line supersedes the search before it; messages from
/// superseded searches are counted and discarded.
pub async fn run_session<S, R>(
    worker: &SearchWorker<S>,
    rx: &mut UnboundedReceiver<WorkerMessage>,
    input: R,
    formatter: &Formatter,
    out: &mut impl Write,
    log: &mut impl Write,
) -> Result<SessionStats>
where
    S: SoldListingSource + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut stats = SessionStats::default();
    let mut input_open = true;
    let mut pending = false;

    while input_open || pending {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("Failed to read input")? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => {
                        worker.submit(line);
                        stats.submitted += 1;
                        pending = true;
                    }
                    None => input_open = false,
                }
            }
            message = rx.recv() => {
                let Some(message) = message else { break };

                if !worker.is_current(message.generation) {
                    debug!("Dropping stale message from search {}", message.generation);
                    stats.stale += 1;
                } else {
                    match message.update {
                        WorkerUpdate::Event(event) => writeln!(log, "{}", event)?,
                        WorkerUpdate::Finished(Ok(outcome)) => {
                            writeln!(out, "{}", formatter.format_outcome(&outcome))?;
                            stats.completed += 1;
                            pending = false;
                        }
                        WorkerUpdate::Finished(Err(e)) => {
                            debug!("Search {} ended without results: {}", message.generation, e);
                            pending = false;
                        }
                    }
                }
            }
        }
    }

    Ok(stats)
}
