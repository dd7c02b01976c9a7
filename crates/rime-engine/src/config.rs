//! Growth configuration, validation, and error types.
//!
//! [`GrowthConfig`] is the input for constructing a [`Simulation`].
//! [`validate()`](GrowthConfig::validate) checks every parameter up front;
//! once it passes, no phase of the simulation can fail.
//!
//! [`Simulation`]: crate::Simulation

use std::error::Error;
use std::fmt;

use rime_core::Coord;
use rime_lattice::LatticeError;
use rime_phases::Coefficients;
use rime_space::{HexOffset2D, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GrowthConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Lattice dimensions are invalid.
    Space(SpaceError),
    /// The initial lattice could not be built.
    Lattice(LatticeError),
    /// The seed lies outside the lattice.
    SeedOutOfBounds {
        /// The configured seed.
        seed: Coord,
        /// Lattice rows.
        rows: u32,
        /// Lattice columns.
        cols: u32,
    },
    /// `iterations` is zero.
    ZeroIterations,
    /// A coefficient is NaN or outside `[0, 1]`.
    CoefficientOutOfRange {
        /// Coefficient name.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Ambient steam density is NaN, infinite, zero, or negative.
    InvalidSteamDensity {
        /// The invalid value.
        value: f64,
    },
    /// Interference amplitude is NaN, infinite, or negative.
    InvalidInterference {
        /// The invalid value.
        value: f64,
    },
    /// `snapshot_interval` is zero.
    ZeroSnapshotInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::SeedOutOfBounds { seed, rows, cols } => {
                write!(f, "seed {seed} outside {rows}x{cols} lattice")
            }
            Self::ZeroIterations => write!(f, "iterations must be at least 1"),
            Self::CoefficientOutOfRange { name, value } => {
                write!(f, "{name} must be in [0, 1], got {value}")
            }
            Self::InvalidSteamDensity { value } => {
                write!(f, "ambient steam density must be finite and positive, got {value}")
            }
            Self::InvalidInterference { value } => {
                write!(f, "interference amplitude must be finite and >= 0, got {value}")
            }
            Self::ZeroSnapshotInterval => write!(f, "snapshot_interval must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

// ── GrowthConfig ───────────────────────────────────────────────────

/// Complete, immutable parameters of one growth run.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthConfig {
    /// Lattice rows. Default: 5.
    pub rows: u32,
    /// Lattice columns. Default: 5.
    pub cols: u32,
    /// Seed position. `None` = the central cell. Default: `None`.
    pub seed: Option<Coord>,
    /// Number of iterations to execute. Default: 100.
    pub iterations: u64,
    /// Attachment, melting and freezing coefficients.
    pub coefficients: Coefficients,
    /// Initial steam in every non-seed cell (rho). Default: 2.0.
    pub ambient_steam: f64,
    /// Diffusion window margin around the crystal's extent. `0` diffuses
    /// the whole lattice every iteration. Default: 0.
    pub diffusion_window: u32,
    /// Relative steam perturbation after melting (sigma). `0` disables
    /// interference. Default: 0.
    pub interference_amplitude: f64,
    /// RNG seed for interference. Default: 0.
    pub interference_seed: u64,
    /// Snapshot every this many iterations (the final iteration is always
    /// snapshotted). Default: 100.
    pub snapshot_interval: u64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            seed: None,
            iterations: 100,
            coefficients: Coefficients::default(),
            ambient_steam: 2.0,
            diffusion_window: 0,
            interference_amplitude: 0.0,
            interference_seed: 0,
            snapshot_interval: 100,
        }
    }
}

impl GrowthConfig {
    /// The lattice shape.
    pub fn space(&self) -> Result<HexOffset2D, ConfigError> {
        Ok(HexOffset2D::new(self.rows, self.cols)?)
    }

    /// The seed position, defaulting to the centre of `space`.
    pub fn resolved_seed(&self, space: &HexOffset2D) -> Coord {
        self.seed.unwrap_or_else(|| space.center())
    }

    /// Check all parameters, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions and seed.
        let space = self.space()?;
        let seed = self.resolved_seed(&space);
        if !space.contains(seed) {
            return Err(ConfigError::SeedOutOfBounds {
                seed,
                rows: self.rows,
                cols: self.cols,
            });
        }
        // 2. At least one iteration.
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        // 3. Coefficients in [0, 1]; NaN fails the range check.
        for (name, value) in self.coefficients.named() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::CoefficientOutOfRange { name, value });
            }
        }
        // 4. Steam density finite and positive.
        if !self.ambient_steam.is_finite() || self.ambient_steam <= 0.0 {
            return Err(ConfigError::InvalidSteamDensity {
                value: self.ambient_steam,
            });
        }
        // 5. Interference amplitude finite and non-negative.
        if !self.interference_amplitude.is_finite() || self.interference_amplitude < 0.0 {
            return Err(ConfigError::InvalidInterference {
                value: self.interference_amplitude,
            });
        }
        // 6. Snapshot cadence.
        if self.snapshot_interval == 0 {
            return Err(ConfigError::ZeroSnapshotInterval);
        }
        Ok(())
    }
}
