//! Background search on a dedicated thread.
//!
//! The caller hands over an owned board snapshot, so the worker never
//! shares mutable state with the thread that spawned it. The result comes
//! back over a channel and, optionally, through a completion callback that
//! fires whether the search succeeds or panics.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use tempo_core::Board;

use super::{MoveStrategy, SearchResult};

/// Errors from running a search in the background.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The operating system refused to start the search thread.
    #[error("failed to spawn search thread: {source}")]
    Spawn {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
    /// The search thread panicked before producing a result.
    #[error("search worker panicked")]
    WorkerPanicked,
}

/// Handle to a search running on another thread.
pub struct SearchTask {
    receiver: Receiver<SearchResult>,
    handle: Option<JoinHandle<()>>,
    result: Option<SearchResult>,
    disconnected: bool,
}

impl SearchTask {
    /// Return the result if the search has finished, without blocking.
    pub fn poll(&mut self) -> Option<&SearchResult> {
        if self.result.is_none() && !self.disconnected {
            match self.receiver.try_recv() {
                Ok(result) => self.result = Some(result),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    warn!("search worker exited without a result");
                    self.disconnected = true;
                }
            }
        }
        self.result.as_ref()
    }

    /// Block until the search finishes and return its result.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::WorkerPanicked`] if the worker died first.
    pub fn wait(mut self) -> Result<SearchResult, SearchError> {
        if let Some(result) = self.result.take() {
            return Ok(result);
        }
        let received = self.receiver.recv();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                return Err(SearchError::WorkerPanicked);
            }
        }
        received.map_err(|_| SearchError::WorkerPanicked)
    }
}

/// Start searching `board` to `depth` on a new thread.
///
/// # Errors
///
/// Returns [`SearchError::Spawn`] if the thread cannot be created.
pub fn spawn_search<S>(strategy: Arc<S>, board: Board, depth: u32) -> Result<SearchTask, SearchError>
where
    S: MoveStrategy + ?Sized + 'static,
{
    spawn_search_with(strategy, board, depth, |_| {})
}

/// Like [`spawn_search`], additionally calling `on_done` on the worker thread
/// once the search ends: with the result, or with
/// [`SearchError::WorkerPanicked`] if the strategy panicked.
///
/// # Errors
///
/// Returns [`SearchError::Spawn`] if the thread cannot be created.
pub fn spawn_search_with<S, F>(
    strategy: Arc<S>,
    board: Board,
    depth: u32,
    on_done: F,
) -> Result<SearchTask, SearchError>
where
    S: MoveStrategy + ?Sized + 'static,
    F: FnOnce(Result<&SearchResult, SearchError>) + Send + 'static,
{
    let (tx, receiver) = mpsc::channel();
    let handle = thread::Builder::new().name("tempo-search".into()).spawn(move || {
        match panic::catch_unwind(AssertUnwindSafe(|| strategy.search(&board, depth))) {
            Ok(result) => {
                on_done(Ok(&result));
                if tx.send(result).is_err() {
                    debug!("search result dropped, task handle already gone");
                }
            }
            Err(_) => {
                warn!(depth, "search strategy panicked");
                on_done(Err(SearchError::WorkerPanicked));
            }
        }
    })?;

    Ok(SearchTask { receiver, handle: Some(handle), result: None, disconnected: false })
}
