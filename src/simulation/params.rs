//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - force constants (repulsion, spring, boundary),
//! - integration step, damping and velocity cap,
//! - shockwave decay, removal floor and age ceiling,
//! - scheduler cadence and random seed

use crate::error::{LayoutError, LayoutResult};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed logical timestep per tick
    pub tick_interval: f64, // target seconds between ticks
    pub k_repulsion: f64, // pairwise repulsion constant
    pub stress_threshold: f64, // stress contribution to repulsion
    pub k_spring: f64, // edge spring constant
    pub rest_length: f64, // edge rest length
    pub boundary_margin: f64, // distance from the viewport edge where containment starts
    pub boundary_strength: f64, // linear restoring constant
    pub damping: f64, // geometric velocity decay, in (0, 1)
    pub max_velocity: f64, // velocity cap after integration
    pub shock_decay: f64, // geometric shockwave decay per tick, in (0, 1)
    pub shock_min_force: f64, // remove a shockwave once decayed below this
    pub shock_max_age: u32, // remove a shockwave past this many ticks
    pub release_force: f64, // magnitude of the shockwave emitted on release
    pub seed: u64, // deterministic seed for stress randomization
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 1.0,
            tick_interval: 1.0 / 30.0,
            k_repulsion: 800.0,
            stress_threshold: 0.5,
            k_spring: 0.02,
            rest_length: 100.0,
            boundary_margin: 50.0,
            boundary_strength: 0.05,
            damping: 0.85,
            max_velocity: 8.0,
            shock_decay: 0.95,
            shock_min_force: 0.1,
            shock_max_age: 300,
            release_force: 500.0,
            seed: 42,
        }
    }
}

impl Parameters {
    /// Reject configurations that would destabilize the integrator.
    /// Called at construction; a bad value never reaches a running
    /// simulation.
    pub fn validate(&self) -> LayoutResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(LayoutError::Config(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            return Err(LayoutError::Config(format!(
                "tick_interval must be positive, got {}",
                self.tick_interval
            )));
        }
        if !(self.rest_length.is_finite() && self.rest_length > 0.0) {
            return Err(LayoutError::Config(format!(
                "rest_length must be positive, got {}",
                self.rest_length
            )));
        }
        if !(self.max_velocity.is_finite() && self.max_velocity > 0.0) {
            return Err(LayoutError::Config(format!(
                "max_velocity must be positive, got {}",
                self.max_velocity
            )));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(LayoutError::Config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.shock_decay > 0.0 && self.shock_decay < 1.0) {
            return Err(LayoutError::Config(format!(
                "shock_decay must be in (0, 1), got {}",
                self.shock_decay
            )));
        }
        if !(self.shock_min_force.is_finite() && self.shock_min_force > 0.0) {
            return Err(LayoutError::Config(format!(
                "shock_min_force must be positive, got {}",
                self.shock_min_force
            )));
        }
        if !(self.boundary_margin.is_finite() && self.boundary_margin >= 0.0) {
            return Err(LayoutError::Config(format!(
                "boundary_margin must be non-negative, got {}",
                self.boundary_margin
            )));
        }
        Ok(())
    }
}
