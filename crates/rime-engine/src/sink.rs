//! Snapshot sinks: where the lattice goes on the snapshot cadence.
//!
//! A [`SnapshotSink`] receives a shared borrow of the lattice, so the
//! lattice cannot change while the sink runs. Sinks that need to keep or
//! ship the data take an owned [`LatticeSnapshot`] copy.
//!
//! [`BackgroundSink`] moves that copy to a worker thread over a bounded
//! channel, so slow consumers (image encoding, disk I/O) overlap with the
//! following iterations instead of stalling them.

use std::thread::JoinHandle;

use crossbeam_channel::{bounded, Sender};
use rime_core::{IterationId, SnapshotError};
use rime_lattice::{Lattice, LatticeSnapshot};
use tracing::warn;

/// `true` if a snapshot is due after `iteration`: on every multiple of
/// `interval` and on the final iteration `total`.
pub fn should_snapshot(iteration: IterationId, interval: u64, total: u64) -> bool {
    iteration.0 == total || (interval > 0 && iteration.0 % interval == 0)
}

/// Consumer of read-only lattice views.
pub trait SnapshotSink {
    /// Handle the lattice state at `iteration`.
    fn snapshot(&mut self, lattice: &Lattice, iteration: IterationId)
        -> Result<(), SnapshotError>;
}

/// Consumer of owned snapshots, runnable on a worker thread.
pub trait OwnedSnapshotSink: Send + 'static {
    /// Handle one snapshot.
    fn consume(&mut self, snapshot: LatticeSnapshot) -> Result<(), SnapshotError>;
}

// ── NullSink ───────────────────────────────────────────────────────

/// Discards every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn snapshot(&mut self, _: &Lattice, _: IterationId) -> Result<(), SnapshotError> {
        Ok(())
    }
}

// ── RecordingSink ──────────────────────────────────────────────────

/// Keeps an owned copy of every snapshot in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    snapshots: Vec<LatticeSnapshot>,
}

impl RecordingSink {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded snapshots in arrival order.
    pub fn snapshots(&self) -> &[LatticeSnapshot] {
        &self.snapshots
    }

    /// Iterations at which snapshots arrived.
    pub fn iterations(&self) -> Vec<IterationId> {
        self.snapshots.iter().map(LatticeSnapshot::iteration).collect()
    }

    /// Take the recorded snapshots.
    pub fn into_snapshots(self) -> Vec<LatticeSnapshot> {
        self.snapshots
    }
}

impl SnapshotSink for RecordingSink {
    fn snapshot(&mut self, lattice: &Lattice, iteration: IterationId) -> Result<(), SnapshotError> {
        self.snapshots.push(lattice.snapshot(iteration));
        Ok(())
    }
}

impl OwnedSnapshotSink for RecordingSink {
    fn consume(&mut self, snapshot: LatticeSnapshot) -> Result<(), SnapshotError> {
        self.snapshots.push(snapshot);
        Ok(())
    }
}

// ── BackgroundSink ─────────────────────────────────────────────────

/// What a [`BackgroundSink`] worker did before it was joined.
#[derive(Debug)]
pub struct BackgroundReport<S> {
    /// The inner sink, handed back.
    pub sink: S,
    /// Snapshots the inner sink accepted.
    pub written: usize,
    /// Snapshots the inner sink rejected.
    pub failed: usize,
}

/// Forwards owned snapshots to an [`OwnedSnapshotSink`] on a worker thread.
///
/// Sending blocks once `capacity` snapshots are queued, which bounds memory
/// when the consumer is slower than the simulation.
pub struct BackgroundSink<S: OwnedSnapshotSink> {
    tx: Option<Sender<LatticeSnapshot>>,
    worker: Option<JoinHandle<BackgroundReport<S>>>,
}

impl<S: OwnedSnapshotSink> BackgroundSink<S> {
    /// Start a worker thread feeding `inner`.
    pub fn spawn(inner: S, capacity: usize) -> Result<Self, SnapshotError> {
        let (tx, rx) = bounded::<LatticeSnapshot>(capacity);
        let worker = std::thread::Builder::new()
            .name("rime-snapshot".into())
            .spawn(move || {
                let mut report = BackgroundReport {
                    sink: inner,
                    written: 0,
                    failed: 0,
                };
                for snap in rx {
                    let iteration = snap.iteration();
                    match report.sink.consume(snap) {
                        Ok(()) => report.written += 1,
                        Err(e) => {
                            warn!(iteration = iteration.0, error = %e, "snapshot dropped");
                            report.failed += 1;
                        }
                    }
                }
                report
            })
            .map_err(|e| SnapshotError::SinkFailed {
                reason: format!("failed to spawn snapshot worker: {e}"),
            })?;
        Ok(Self {
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// Close the channel, wait for queued snapshots to drain, and return the
    /// worker's report.
    pub fn finish(mut self) -> Result<BackgroundReport<S>, SnapshotError> {
        self.tx.take();
        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| SnapshotError::SinkFailed {
                reason: "snapshot worker panicked".into(),
            }),
            None => Err(SnapshotError::SinkDisconnected),
        }
    }
}

impl<S: OwnedSnapshotSink> SnapshotSink for BackgroundSink<S> {
    fn snapshot(&mut self, lattice: &Lattice, iteration: IterationId) -> Result<(), SnapshotError> {
        let tx = self.tx.as_ref().ok_or(SnapshotError::SinkDisconnected)?;
        tx.send(lattice.snapshot(iteration))
            .map_err(|_| SnapshotError::SinkDisconnected)
    }
}

impl<S: OwnedSnapshotSink> Drop for BackgroundSink<S> {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}
