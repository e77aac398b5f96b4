//! Error types for grid construction and configuration.
//!
//! The simulation proper has no recoverable runtime errors: randomness never
//! fails and tile indexing is bounds-checked by construction. What remains is
//! rejecting bad input at the boundary and surfacing allocation failure for
//! very large grids.

use std::fmt;

/// Errors raised while building a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Grid side length of zero.
    InvalidTileCount {
        /// The rejected side length
        tile_count: usize,
    },
    /// `tile_count²` does not fit in `usize`.
    GridTooLarge {
        /// The rejected side length
        tile_count: usize,
    },
    /// The tile array could not be allocated.
    AllocationFailed {
        /// Number of tiles requested
        tiles: usize,
        /// Allocator message
        reason: String,
    },
    /// A configuration value is outside its valid range.
    InvalidParameter {
        /// Parameter name (e.g. `"spread_probability"`)
        name: &'static str,
        /// Description of the violation
        message: String,
    },
    /// A configuration file could not be read or written.
    ConfigIo {
        /// Path of the file
        path: String,
        /// Underlying I/O message
        reason: String,
    },
    /// A configuration file could not be parsed or serialized.
    ConfigParse {
        /// Underlying serde message
        reason: String,
    },
}

impl SimError {
    /// Create error for an out-of-range configuration value.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileCount { tile_count } => {
                write!(f, "Tile count must be at least 1 (got {tile_count})")
            }
            Self::GridTooLarge { tile_count } => {
                write!(f, "Grid of {tile_count}x{tile_count} tiles exceeds addressable size")
            }
            Self::AllocationFailed { tiles, reason } => {
                write!(f, "Failed to allocate {tiles} tiles: {reason}")
            }
            Self::InvalidParameter { name, message } => {
                write!(f, "Invalid parameter {name}: {message}")
            }
            Self::ConfigIo { path, reason } => {
                write!(f, "Config file '{path}': {reason}")
            }
            Self::ConfigParse { reason } => write!(f, "Failed to parse config: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}
