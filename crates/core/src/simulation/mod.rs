//! Run controller: drives generations until the fire burns out
//!
//! `Simulation` is the explicit context of one run. It owns the grid, the
//! stepper, the seeded RNG and the running statistics, so nothing about a run
//! lives in global state and any run can be replayed from its seed.
//!
//! The loop checks a cancel flag between generations, never during one, so an
//! interrupted run still ends with a settled grid and a complete summary.

use crate::config::SimulationConfig;
use crate::grid::TileGrid;
use crate::ignition::ignite_center;
use crate::render::GridSnapshot;
use crate::solver::{create_stepper, Stepper};
use crate::telemetry::{
    is_report_step, ProfilerScope, RunOutcome, RunSummary, RunTelemetry, StepReport,
};
use crate::{SimError, SimRng};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// One simulation run: grid, stepper, random source and statistics.
pub struct Simulation {
    config: SimulationConfig,
    grid: TileGrid,
    stepper: Box<dyn Stepper>,
    rng: SimRng,
    telemetry: RunTelemetry,
    generation: u64,
    ignition_point: (usize, usize),
}

impl Simulation {
    /// Build the grid, draw its fuel and ignite the center tile.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the grid cannot be
    /// allocated.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut rng = config
            .seed
            .map_or_else(SimRng::from_entropy, SimRng::from_seed_u64);
        let mut grid = TileGrid::new(
            config.tile_count,
            config.fuel_min,
            config.fuel_max,
            &mut rng,
        )?;
        let ignition_point = ignite_center(&mut grid);
        let stepper = create_stepper(&config);

        info!(
            "Created {}x{} tile grid (seed {}), ignited at ({}, {})",
            config.tile_count,
            config.tile_count,
            rng.seed(),
            ignition_point.0,
            ignition_point.1
        );

        Ok(Self {
            config,
            grid,
            stepper,
            rng,
            telemetry: RunTelemetry::new(),
            generation: 0,
            ignition_point,
        })
    }

    /// Advance one generation, timing it and folding it into the statistics.
    pub fn step(&mut self) -> StepReport {
        let scope = ProfilerScope::new("step");
        let active_tiles = self.stepper.step(&mut self.grid, &mut self.rng);
        let duration = scope.elapsed();

        self.generation += 1;
        let report = StepReport {
            generation: self.generation,
            active_tiles,
            total_tiles: self.grid.total_tiles(),
            duration,
        };
        self.telemetry.record(&report);

        if is_report_step(self.generation, self.config.report_interval) {
            debug!(
                generation = report.generation,
                active_tiles = report.active_tiles,
                duration_us = report.duration_us(),
                "Generation report"
            );
        }

        report
    }

    /// Step until a generation finds no burning tile.
    ///
    /// The final step is the one that reports zero active tiles, so it runs one
    /// generation past the last tile burning out.
    pub fn run_until_extinguished(&mut self) -> RunSummary {
        let never = AtomicBool::new(false);
        self.run(&never, |_, _| {})
    }

    /// Step until extinguished or until `cancel` is raised.
    ///
    /// `observer` is called after every generation with its report and a
    /// snapshot of the settled grid, e.g. to print telemetry or redraw.
    pub fn run<F>(&mut self, cancel: &AtomicBool, mut observer: F) -> RunSummary
    where
        F: FnMut(&StepReport, GridSnapshot<'_>),
    {
        loop {
            if cancel.load(Ordering::SeqCst) {
                warn!(
                    "Run cancelled after {} generations ({} tiles still burning)",
                    self.generation,
                    self.grid.burning_count()
                );
                return self.summary(RunOutcome::Cancelled);
            }

            let report = self.step();
            observer(&report, self.snapshot());

            if report.is_extinguished() {
                info!("Fire extinguished after {} generations", self.generation);
                return self.summary(RunOutcome::Extinguished);
            }
        }
    }

    /// Statistics so far, labelled with `outcome`.
    pub fn summary(&self, outcome: RunOutcome) -> RunSummary {
        self.telemetry.summary(outcome, self.rng.seed())
    }

    /// Read-only view of the grid for a renderer.
    pub fn snapshot(&self) -> GridSnapshot<'_> {
        GridSnapshot::new(&self.grid, self.generation)
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn telemetry(&self) -> &RunTelemetry {
        &self.telemetry
    }

    /// Generations executed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed of the run's RNG.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Coordinates of the initially ignited tile.
    pub fn ignition_point(&self) -> (usize, usize) {
        self.ignition_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpdateMode;

    #[test]
    fn test_new_seeds_center() {
        let sim = Simulation::new(SimulationConfig::new(9).with_seed(1)).unwrap();
        assert_eq!(sim.ignition_point(), (4, 4));
        assert_eq!(sim.grid().burning_count(), 1);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.seed(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            Simulation::new(SimulationConfig::new(0)),
            Err(SimError::InvalidTileCount { .. })
        ));
        assert!(Simulation::new(SimulationConfig::new(4).with_spread_probability(2.0)).is_err());
    }

    #[test]
    fn test_step_reports_generation() {
        let mut sim = Simulation::new(SimulationConfig::new(5).with_seed(3)).unwrap();
        let first = sim.step();
        let second = sim.step();
        assert_eq!(first.generation, 1);
        assert_eq!(first.active_tiles, 1);
        assert_eq!(first.total_tiles, 25);
        assert_eq!(second.generation, 2);
        assert_eq!(sim.telemetry().steps(), 2);
    }

    #[test]
    fn test_cancel_before_first_step() {
        let mut sim = Simulation::new(SimulationConfig::new(5).with_seed(3)).unwrap();
        let cancel = AtomicBool::new(true);
        let summary = sim.run(&cancel, |_, _| panic!("no step should run"));
        assert_eq!(summary.outcome, RunOutcome::Cancelled);
        assert_eq!(summary.steps, 0);
        assert_eq!(summary.average_step_us, 0);
    }

    #[test]
    fn test_cancel_from_observer_stops_between_generations() {
        let mut sim = Simulation::new(SimulationConfig::new(50).with_seed(3)).unwrap();
        let cancel = AtomicBool::new(false);
        let summary = sim.run(&cancel, |report, _| {
            if report.generation == 10 {
                cancel.store(true, Ordering::SeqCst);
            }
        });
        assert_eq!(summary.outcome, RunOutcome::Cancelled);
        assert_eq!(summary.steps, 10);
        assert_eq!(sim.generation(), 10);
    }

    #[test]
    fn test_observer_sees_settled_snapshots() {
        let config = SimulationConfig::new(7)
            .with_seed(11)
            .with_update_mode(UpdateMode::InPlace);
        let mut sim = Simulation::new(config).unwrap();
        let mut generations = Vec::new();
        let summary = sim.run(&AtomicBool::new(false), |report, snapshot| {
            assert_eq!(snapshot.generation(), report.generation);
            generations.push(report.generation);
        });
        assert_eq!(summary.outcome, RunOutcome::Extinguished);
        assert_eq!(generations.len() as u64, summary.steps);
    }
}
