//! Tile Fire Simulation Core Library
//!
//! Stochastic fire propagation over a square tile grid. Every tile holds a fuel
//! reserve; a burning tile ignites each orthogonal neighbor with a fixed
//! probability per generation, the neighbor burning with its own stored fuel as
//! intensity, and burns down at a fixed rate until exhausted.
//!
//! ## Components
//!
//! - [`grid`]: tile state and the square grid store
//! - [`ignition`]: seeding of the initial burning tile
//! - [`solver`]: the propagation stepper (double-buffered or in-place)
//! - [`simulation`]: the run controller driving generations to extinction
//! - [`telemetry`]: per-step reports and the run summary
//! - [`render`]: read-only snapshots and vertex export for a renderer
//!
//! ## Example
//!
//! ```rust,no_run
//! use tile_fire_core::{Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::new(SimulationConfig::new(200).with_seed(42))?;
//! let summary = sim.run_until_extinguished();
//! println!("{summary}");
//! # Ok::<(), tile_fire_core::SimError>(())
//! ```

pub mod config;
mod error;
pub mod grid;
pub mod ignition;
pub mod render;
mod rng;
pub mod simulation;
pub mod solver;
pub mod telemetry;

// Re-export main types
pub use config::{SimulationConfig, UpdateMode};
pub use error::SimError;
pub use grid::{Tile, TileGrid};
pub use render::{GridSnapshot, TileView, Vertex, VertexBuffer};
pub use rng::SimRng;
pub use simulation::Simulation;
pub use solver::{create_stepper, DoubleBufferedStepper, InPlaceStepper, SpreadParams, Stepper};
pub use telemetry::{RunOutcome, RunSummary, RunTelemetry, StepReport};
