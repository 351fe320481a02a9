//! Background worker for recording unknown signals
//!
//! Recording signals that matched no station is bookkeeping and must never
//! block or fail a position response. Batches are handed to a dedicated
//! thread through a bounded queue: a full queue drops the batch, and
//! recorder errors are logged and discarded. Queued batches are flushed
//! when the worker is dropped, but are lost if the process dies first.

use crate::core::types::Signal;
use crate::directory::UnknownSignalRecorder;
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Owns the recorder thread and the queue feeding it.
pub struct UnknownSignalWorker {
    sender: Option<SyncSender<Vec<Signal>>>,
    handle: Option<JoinHandle<()>>,
}

impl UnknownSignalWorker {
    /// Spawn the recorder thread with a queue of the given capacity.
    pub fn spawn(recorder: Arc<dyn UnknownSignalRecorder>, queue_size: usize) -> Self {
        let (sender, receiver) = mpsc::sync_channel::<Vec<Signal>>(queue_size);

        let handle = thread::spawn(move || {
            for batch in receiver {
                if let Err(error) = recorder.record_unknown(&batch) {
                    log::error!(
                        "failed to record {} unknown signal(s): {}",
                        batch.len(),
                        error
                    );
                }
            }
        });

        Self {
            sender: Some(sender),
            handle: Some(handle),
        }
    }

    /// Queue a batch of signals for recording. Never blocks; the batch is
    /// dropped when the queue is full or the worker is gone.
    pub fn submit(&self, signals: Vec<Signal>) {
        if signals.is_empty() {
            return;
        }

        if let Some(sender) = &self.sender {
            match sender.try_send(signals) {
                Ok(()) => {}
                Err(TrySendError::Full(batch)) => {
                    log::warn!(
                        "recorder queue full, dropping {} unknown signal(s)",
                        batch.len()
                    );
                }
                Err(TrySendError::Disconnected(batch)) => {
                    log::warn!(
                        "recorder worker stopped, dropping {} unknown signal(s)",
                        batch.len()
                    );
                }
            }
        }
    }
}

impl Drop for UnknownSignalWorker {
    fn drop(&mut self) {
        // Closing the channel lets the thread drain what is already queued
        // and exit; join so the flush completes before shutdown continues.
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
