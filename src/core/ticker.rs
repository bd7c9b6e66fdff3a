//! Periodic display tick for a running timer.
//!
//! The ticker thread never touches timer state. It only pushes a message
//! into the UI loop's channel; the loop calls `TimerMachine::tick`.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Send `make()` into `tx` every `interval` until cancelled, dropped,
    /// or the receiving side goes away.
    pub fn spawn<T, F>(interval: Duration, tx: Sender<T>, make: F) -> Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tx.send(make()).is_err() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            cancel: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the thread to exit. Idempotent.
    pub fn cancel(&mut self) {
        // dropping the sender wakes the thread immediately
        self.cancel.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("ticker thread panicked");
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
