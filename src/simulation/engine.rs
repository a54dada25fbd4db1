//! Runtime simulator: tick orchestration, fixed-cadence scheduling and
//! the external mutation operations
//!
//! `Simulator` is the runtime bundle built from a scenario: it owns the
//! network state, the numerical parameters, the active force set, the
//! initial node configuration (for reset and recovery) and a seeded RNG.
//!
//! The model is single-threaded and cooperative: exactly one tick is in
//! flight at a time, and every mutation operation is synchronous and
//! applies between ticks.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::error::{LayoutError, LayoutResult};
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Network, Node, NVec2, Shockwave, Snapshot, Viewport};
use crate::simulation::stats::compute_stats;

/// Fully-initialized runtime simulation.
///
/// Constructed from a [`ScenarioConfig`](crate::ScenarioConfig) via
/// [`Simulator::build_scenario`]. The hosting layer drives it through
/// [`Simulator::on_frame`] (or [`Simulator::step`] directly in headless
/// and test settings) and applies input through the mutation operations.
pub struct Simulator {
    pub parameters: Parameters,
    pub network: Network,
    pub forces: ForceSet,
    /// Node arena index by id; node ids are stable for the simulation's
    /// lifetime.
    pub(crate) index: HashMap<String, usize>,
    /// Initial node configuration, restored by `reset`.
    pub(crate) initial: Vec<Node>,
    pub(crate) rng: StdRng,
    pub(crate) running: bool,
    /// Nominal seconds accumulated toward the next cadence boundary.
    pub(crate) accumulator: f64,
}

impl Simulator {
    // =====================================================================
    // Stepping and scheduling
    // =====================================================================

    /// Advance the simulation by exactly one tick and publish a snapshot.
    ///
    /// One tick: accumulate all force contributions, integrate, age and
    /// prune shockwaves, recompute statistics.
    pub fn step(&mut self) -> Snapshot {
        semi_implicit_euler(&mut self.network, &self.forces, &self.parameters);
        self.age_shockwaves();

        let stats = compute_stats(&self.network, &self.parameters);
        self.network.snapshot(stats, self.parameters.shock_decay)
    }

    /// Host frame callback: run at most one tick per call, at the fixed
    /// target cadence.
    ///
    /// `elapsed` is the nominal time since the previous callback in
    /// seconds. Frames arriving faster than the cadence are skipped; a
    /// host stall is clamped to a single banked interval so catch-up can
    /// never inject energy through burst stepping. Returns `None` while
    /// paused or between cadence boundaries.
    pub fn on_frame(&mut self, elapsed: f64) -> Option<Snapshot> {
        if !self.running {
            return None;
        }

        self.accumulator += elapsed;
        if self.accumulator < self.parameters.tick_interval {
            return None;
        }

        // Carry at most one interval of residual
        self.accumulator =
            (self.accumulator - self.parameters.tick_interval).min(self.parameters.tick_interval);

        Some(self.step())
    }

    /// Stop automatic stepping. Mutation operations stay available.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resume automatic stepping.
    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read-only snapshot of the current state, without advancing.
    pub fn snapshot(&self) -> Snapshot {
        let stats = compute_stats(&self.network, &self.parameters);
        self.network.snapshot(stats, self.parameters.shock_decay)
    }

    // =====================================================================
    // Mutation operations
    // =====================================================================

    /// Append a shockwave at `(x, y)`. It enters the active set at age 0
    /// and first contributes on the next tick.
    pub fn trigger_shockwave(&mut self, x: f64, y: f64, force: f64) {
        self.network.shockwaves.push(Shockwave {
            origin: NVec2::new(x, y),
            force,
            age: 0,
        });
    }

    /// Override a node's position and zero its velocity, bypassing
    /// integration until [`release`](Self::release). Unknown ids are
    /// ignored.
    pub fn pin(&mut self, id: &str, x: f64, y: f64) {
        let Some(&i) = self.index.get(id) else {
            debug!(id, "pin ignored, no such node");
            return;
        };
        let node = &mut self.network.nodes[i];
        node.x = NVec2::new(x, y);
        node.v = NVec2::zeros();
        node.pinned = true;
    }

    /// End pinning: the node resumes integration from its current
    /// position with zero velocity, and a releasing shockwave is emitted
    /// at that location. Unknown ids are ignored.
    pub fn release(&mut self, id: &str) {
        let Some(&i) = self.index.get(id) else {
            debug!(id, "release ignored, no such node");
            return;
        };
        let node = &mut self.network.nodes[i];
        node.pinned = false;
        node.v = NVec2::zeros();
        let origin = node.x;

        let force = self.parameters.release_force;
        self.network.shockwaves.push(Shockwave {
            origin,
            force,
            age: 0,
        });
    }

    /// Restore all node positions and velocities to the initial
    /// configuration, clear pinning and all shockwaves, rewind time and
    /// the cadence accumulator. Stress values are kept.
    pub fn reset(&mut self) {
        for (node, init) in self.network.nodes.iter_mut().zip(self.initial.iter()) {
            node.x = init.x;
            node.v = init.v;
            node.pinned = false;
        }
        self.network.shockwaves.clear();
        self.network.t = 0.0;
        self.accumulator = 0.0;
    }

    /// Assign every node a fresh stress value in [0, 1] from the seeded
    /// RNG. Mass follows automatically, being derived from stress.
    pub fn randomize_stress(&mut self) {
        for node in &mut self.network.nodes {
            node.stress = self.rng.random_range(0.0..=1.0);
        }
    }

    /// Update the viewport dimensions. Non-positive or non-finite
    /// dimensions are rejected rather than tolerated mid-simulation.
    pub fn resize(&mut self, width: f64, height: f64) -> LayoutResult<()> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(LayoutError::Config(format!(
                "viewport must have positive dimensions, got {width}x{height}"
            )));
        }
        self.network.viewport = Viewport { width, height };
        Ok(())
    }

    // =====================================================================
    // Internals
    // =====================================================================

    /// Age every active shockwave by one tick and drop the ones whose
    /// decayed magnitude fell under the floor or whose age passed the
    /// ceiling.
    fn age_shockwaves(&mut self) {
        let decay = self.parameters.shock_decay;
        let min_force = self.parameters.shock_min_force;
        let max_age = self.parameters.shock_max_age;

        self.network.shockwaves.retain_mut(|wave| {
            wave.age += 1;
            wave.age <= max_age && wave.magnitude(decay) >= min_force
        });
    }
}
