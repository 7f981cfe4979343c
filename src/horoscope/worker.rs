//! Background horoscope fetching
//!
//! The interactive view must keep redrawing while a request is in flight, so
//! lookups run on a dedicated thread. Requests are tagged with a ticket; the
//! selection state uses it to drop responses for selections that have since
//! changed. Requests still queued when the thread picks up work are skipped
//! in favour of the newest one.

use super::date::HoroscopeDate;
use super::lookup::{HoroscopeLookup, HoroscopeResult};
use crate::riders::{Rider, RiderId};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

/// A lookup to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeRequest {
    /// Sequence number of the selection that issued the request
    pub ticket: u64,
    /// Rider to look up
    pub rider: Rider,
    /// Day to look up
    pub date: HoroscopeDate,
}

/// Outcome of a lookup, echoed back with its ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeResponse {
    /// Ticket of the originating request
    pub ticket: u64,
    /// Rider the request was for
    pub rider_id: RiderId,
    /// The horoscope, or `None` if it could not be obtained
    pub result: Option<HoroscopeResult>,
}

/// Handle to the lookup thread
///
/// Dropping the handle closes the request channel; the thread exits once its
/// current request settles.
pub struct HoroscopeWorker {
    requests: Sender<HoroscopeRequest>,
    responses: Receiver<HoroscopeResponse>,
}

impl HoroscopeWorker {
    /// Start the lookup thread
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn spawn(lookup: HoroscopeLookup) -> std::io::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<HoroscopeRequest>();
        let (response_tx, response_rx) = mpsc::channel::<HoroscopeResponse>();

        thread::Builder::new()
            .name("horoscope-worker".to_string())
            .spawn(move || {
                while let Ok(request) = request_rx.recv() {
                    let request = drain_to_latest(&request_rx, request);
                    let result = lookup.fetch_for(&request.rider, request.date);
                    let response = HoroscopeResponse {
                        ticket: request.ticket,
                        rider_id: request.rider.id,
                        result,
                    };
                    if response_tx.send(response).is_err() {
                        break;
                    }
                }
                tracing::debug!("horoscope worker stopped");
            })?;

        Ok(Self {
            requests: request_tx,
            responses: response_rx,
        })
    }

    /// Queue a request; returns `false` if the worker has stopped
    pub fn submit(&self, request: HoroscopeRequest) -> bool {
        tracing::debug!(ticket = request.ticket, rider = %request.rider.name, "queueing horoscope lookup");
        self.requests.send(request).is_ok()
    }

    /// Next finished response, without blocking
    #[must_use]
    pub fn try_next(&self) -> Option<HoroscopeResponse> {
        match self.responses.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Next finished response, waiting up to `timeout`
    #[must_use]
    pub fn next_timeout(&self, timeout: Duration) -> Option<HoroscopeResponse> {
        match self.responses.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Skip queued requests that a newer selection has already superseded
fn drain_to_latest(
    rx: &Receiver<HoroscopeRequest>,
    mut latest: HoroscopeRequest,
) -> HoroscopeRequest {
    for newer in rx.try_iter() {
        tracing::debug!(ticket = latest.ticket, "skipping superseded horoscope lookup");
        latest = newer;
    }
    latest
}
