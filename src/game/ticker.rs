use log::trace;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Display-only clock for the active puzzle.
///
/// A background thread sends the time elapsed since `started` once per interval. The
/// ticks never feed into the solve duration. Cancelling, or dropping the ticker, stops
/// the thread and waits for it to exit, so two tickers never run for the same session.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    tick_rx: Receiver<Duration>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn start(started: SystemTime, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (tick_tx, tick_rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    let elapsed = started.elapsed().unwrap_or_default();
                    if tick_tx.send(elapsed).is_err() {
                        break;
                    }
                }
                // Stop requested or the ticker was dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        trace!(target: "ticker", "Ticker started");

        Self {
            stop_tx: Some(stop_tx),
            tick_rx,
            handle: Some(handle),
        }
    }

    /// Ticks received since the last call, oldest first.
    pub fn drain(&self) -> Vec<Duration> {
        self.tick_rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next tick.
    pub fn next_tick(&self, timeout: Duration) -> Option<Duration> {
        self.tick_rx.recv_timeout(timeout).ok()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            trace!(target: "ticker", "Ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
