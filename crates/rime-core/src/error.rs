//! Error types for the Rime simulator.
//!
//! Phase computations are total, so the only run-time failures are
//! misuse of the orchestrator (stepping past completion, cancellation)
//! and failures of the external snapshot collaborator. Configuration
//! errors live with the configuration in `rime-engine`.

use std::error::Error;
use std::fmt;

/// Errors from the simulation orchestrator during `step()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The simulation already executed its final iteration.
    Completed {
        /// Number of iterations that were executed.
        iterations: u64,
    },
    /// A cancellation request was observed between iterations.
    Cancelled {
        /// Number of iterations that completed before cancellation.
        iterations: u64,
    },
    /// The snapshot collaborator failed. The iteration that triggered the
    /// snapshot was already committed.
    Snapshot(SnapshotError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed { iterations } => {
                write!(f, "simulation already completed after {iterations} iterations")
            }
            Self::Cancelled { iterations } => {
                write!(f, "simulation cancelled after {iterations} iterations")
            }
            Self::Snapshot(e) => write!(f, "snapshot: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snapshot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SnapshotError> for StepError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}

/// Errors reported by snapshot sinks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// The sink could not produce its artifact.
    SinkFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// A background sink's worker thread is gone.
    SinkDisconnected,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SinkFailed { reason } => write!(f, "sink failed: {reason}"),
            Self::SinkDisconnected => write!(f, "snapshot worker disconnected"),
        }
    }
}

impl Error for SnapshotError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_error_display() {
        assert_eq!(
            StepError::Completed { iterations: 10 }.to_string(),
            "simulation already completed after 10 iterations"
        );
        assert_eq!(
            StepError::Cancelled { iterations: 3 }.to_string(),
            "simulation cancelled after 3 iterations"
        );
    }

    #[test]
    fn snapshot_error_is_source_of_step_error() {
        let inner = SnapshotError::SinkFailed {
            reason: "disk full".into(),
        };
        let outer: StepError = inner.clone().into();
        assert_eq!(outer.to_string(), "snapshot: sink failed: disk full");
        let src = outer.source().expect("snapshot errors carry a source");
        assert_eq!(src.to_string(), inner.to_string());
    }

    #[test]
    fn non_wrapping_variants_have_no_source() {
        assert!(StepError::Completed { iterations: 1 }.source().is_none());
        assert!(StepError::Cancelled { iterations: 1 }.source().is_none());
    }
}
