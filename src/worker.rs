//! Background search worker.
//!
//! Every search runs on its own Tokio task and reports back over a channel.
//! Submitting a new search bumps the generation counter; messages from older
//! generations still arrive but `is_current` lets the receiver drop them.
//! In-flight fetches are never cancelled.

use crate::ebay::SoldListingSource;
use crate::error::PricerError;
use crate::events::SearchEvent;
use crate::search::{run_search, SearchOutcome};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug)]
pub enum WorkerUpdate {
    Event(SearchEvent),
    /// Always the last message of a generation.
    Finished(Result<SearchOutcome, PricerError>),
}

#[derive(Debug)]
pub struct WorkerMessage {
    pub generation: u64,
    pub update: WorkerUpdate,
}

pub struct SearchWorker<S> {
    source: Arc<S>,
    generation: Arc<AtomicU64>,
    tx: mpsc::UnboundedSender<WorkerMessage>,
}

impl<S> SearchWorker<S>
where
    S: SoldListingSource + 'static,
{
    /// Creates a worker and the receiving end of its message channel.
    pub fn new(source: S) -> (Self, mpsc::UnboundedReceiver<WorkerMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = Self { source: Arc::new(source), generation: Arc::new(AtomicU64::new(0)), tx };
        (worker, rx)
    }

    /// Starts a search in the background and returns its generation.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&self, raw_isbn: impl Into<String>) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let raw_isbn = raw_isbn.into();

        debug!("Submitting search {} for {:?}", generation, raw_isbn);

        tokio::spawn(async move {
            let events = tx.clone();
            let result = run_search(&*source, &raw_isbn, move |event| {
                let _ = events.send(WorkerMessage { generation, update: WorkerUpdate::Event(event) });
            })
            .await;

            if tx.send(WorkerMessage { generation, update: WorkerUpdate::Finished(result) }).is_err() {
                debug!("Receiver gone, dropping result of search {}", generation);
            }
        });

        generation
    }

    /// Generation of the most recently submitted search (0 before any).
    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Returns true if `generation` belongs to the newest search.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current()
    }
}
