//! Configuration types for loading layout scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ViewportConfig`]   – layout area dimensions
//! - [`ParametersConfig`] – numerical parameters and force constants
//! - [`NodeConfig`]       – initial state for each node
//! - [`EdgeConfig`]       – connections between nodes, by id
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! viewport:
//!   width: 800.0
//!   height: 600.0
//!
//! parameters:            # optional; omitted fields take defaults
//!   k_repulsion: 800.0
//!   k_spring: 0.02
//!   rest_length: 100.0
//!   damping: 0.85
//!   max_velocity: 8.0
//!   shock_decay: 0.95
//!   seed: 42
//!
//! nodes:
//!   - id: gateway
//!     kind: gateway
//!     label: "Edge Gateway"
//!     x: 400.0
//!     y: 300.0
//!     stress: 0.2
//!   - id: users-db
//!     kind: database
//!     x: 250.0
//!     y: 420.0          # stress defaults to 0, label to the id
//!
//! edges:
//!   - source: gateway
//!     target: users-db
//! ```
//!
//! The engine maps this configuration into its internal runtime
//! representation; see `simulation::scenario`.

use serde::Deserialize;

use crate::simulation::states::NodeKind;

/// Layout area dimensions. Must be strictly positive; validated when the
/// scenario is built.
#[derive(Deserialize, Debug, Clone)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

/// Numerical parameters and force constants for a scenario.
/// Every field has a default, so a scenario file may specify any subset.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64, // fixed logical timestep
    pub tick_interval: f64, // target seconds between ticks
    pub k_repulsion: f64,
    pub stress_threshold: f64,
    pub k_spring: f64,
    pub rest_length: f64,
    pub boundary_margin: f64,
    pub boundary_strength: f64,
    pub damping: f64,
    pub max_velocity: f64,
    pub shock_decay: f64,
    pub shock_min_force: f64,
    pub shock_max_age: u32,
    pub release_force: f64,
    pub seed: u64, // deterministic seed to make runs reproducible
}

impl Default for ParametersConfig {
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

/// Configuration for a single node's initial state.
#[derive(Deserialize, Debug, Clone)]
pub struct NodeConfig {
    pub id: String, // unique across the scenario
    pub kind: NodeKind,
    pub label: Option<String>, // falls back to the id
    pub x: f64, // initial position
    pub y: f64,
    #[serde(default)]
    pub stress: f64, // in [0, 1]
}

/// A connection between two nodes, referenced by id.
#[derive(Deserialize, Debug, Clone)]
pub struct EdgeConfig {
    pub source: String,
    pub target: String,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub viewport: ViewportConfig, // layout area
    #[serde(default)]
    pub parameters: ParametersConfig, // numerical parameters
    pub nodes: Vec<NodeConfig>, // initial node states
    #[serde(default)]
    pub edges: Vec<EdgeConfig>, // connections by node id
}
