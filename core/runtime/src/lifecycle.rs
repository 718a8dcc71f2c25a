//! FILENAME: core/runtime/src/lifecycle.rs
// PURPOSE: Blocking run loop for the headless program.

use std::io;

use tokio::sync::broadcast;

/// Handle for posting a quit event into the run loop.
///
/// Cloneable so a test harness or a background task can request
/// termination from anywhere. Built on a broadcast channel: quit events
/// posted before the loop starts are buffered, not lost.
#[derive(Debug, Clone)]
pub struct QuitHandle {
    tx: broadcast::Sender<i32>,
}

impl QuitHandle {
    /// Request the loop to terminate with the given exit code.
    pub fn quit(&self, code: i32) {
        // A closed channel means the loop already returned; nothing to do.
        let _ = self.tx.send(code);
    }
}

/// The headless event loop.
///
/// `run` blocks until a quit event is posted through a [`QuitHandle`] or
/// Ctrl-C arrives, then yields the exit code to propagate as the process
/// exit status.
pub struct RunLoop {
    tx: broadcast::Sender<i32>,
    rx: broadcast::Receiver<i32>,
}

impl RunLoop {
    pub fn new() -> Self {
        // A single quit event ends the loop; the buffer only has to absorb
        // redundant quit requests.
        let (tx, rx) = broadcast::channel(16);
        RunLoop { tx, rx }
    }

    /// Returns a new handle for posting quit events.
    pub fn quit_handle(&self) -> QuitHandle {
        QuitHandle {
            tx: self.tx.clone(),
        }
    }

    /// Process events until an explicit quit is requested.
    ///
    /// Returns the exit code carried by the quit event, or 0 when the
    /// loop ends on Ctrl-C. Fails only if the Ctrl-C handler cannot be
    /// installed.
    pub async fn run(mut self) -> io::Result<i32> {
        tokio::select! {
            event = self.rx.recv() => Ok(event.unwrap_or(0)),
            result = tokio::signal::ctrl_c() => {
                result?;
                Ok(0)
            }
        }
    }
}

impl Default for RunLoop {
    fn default() -> Self {
        Self::new()
    }
}
