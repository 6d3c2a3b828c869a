// SPDX-License-Identifier: MPL-2.0
//! Collector that receives lifecycle events and keeps the most recent ones.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{AlertEventKind, DiagnosticEvent, EventCapacity, RingLog};

/// Channel depth between handles and the collector.
const CHANNEL_CAPACITY: usize = 128;

/// Cheap, cloneable sender for lifecycle events.
///
/// Sending never blocks: when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event stamped with the current time.
    pub fn record(&self, kind: AlertEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    /// Records an event at an explicit time.
    pub fn record_at(&self, kind: AlertEventKind, timestamp: Instant) {
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::with_timestamp(kind, timestamp));
    }

    /// Like [`record`](Self::record), but reports whether the event was queued.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` when the channel is saturated and
    /// `TrySendError::Disconnected` once the collector is gone.
    pub fn try_record(&self, kind: AlertEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Owns the event log and drains handles into it.
pub struct DiagnosticsCollector {
    log: RingLog<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            log: RingLog::new(capacity),
            event_rx,
            event_tx,
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the log. Call once per UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.log.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn record(&mut self, kind: AlertEventKind) {
        self.log.push(DiagnosticEvent::new(kind));
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.log.iter()
    }

    /// Event kinds in the order they were logged.
    pub fn kinds(&self) -> impl Iterator<Item = &AlertEventKind> {
        self.log.iter().map(|event| &event.kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.log.capacity()
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(EventCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.log.len())
            .field("capacity", &self.log.capacity())
            .finish_non_exhaustive()
    }
}
