//! Build a fully-initialized simulator from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! [`Simulator`] bundle:
//! - numerical parameters ([`Parameters`], validated)
//! - network state (nodes at their initial positions, resolved edges)
//! - active force set ([`ForceSet`] with repulsion, springs, boundary
//!   containment and the shockwave field)
//!
//! Edge ids are resolved to arena indices here; a dangling id is a
//! construction error, never a runtime condition.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{NodeConfig, ScenarioConfig};
use crate::error::{LayoutError, LayoutResult};
use crate::simulation::engine::Simulator;
use crate::simulation::forces::{
    BoundaryContainment, ForceSet, Repulsion, ShockwaveField, SpringNetwork,
};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Edge, Network, Node, NVec2, Viewport};

impl Simulator {
    pub fn build_scenario(cfg: ScenarioConfig) -> LayoutResult<Simulator> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            tick_interval: p_cfg.tick_interval,
            k_repulsion: p_cfg.k_repulsion,
            stress_threshold: p_cfg.stress_threshold,
            k_spring: p_cfg.k_spring,
            rest_length: p_cfg.rest_length,
            boundary_margin: p_cfg.boundary_margin,
            boundary_strength: p_cfg.boundary_strength,
            damping: p_cfg.damping,
            max_velocity: p_cfg.max_velocity,
            shock_decay: p_cfg.shock_decay,
            shock_min_force: p_cfg.shock_min_force,
            shock_max_age: p_cfg.shock_max_age,
            release_force: p_cfg.release_force,
            seed: p_cfg.seed,
        };
        parameters.validate()?;

        let v_cfg = cfg.viewport;
        if !(v_cfg.width.is_finite()
            && v_cfg.width > 0.0
            && v_cfg.height.is_finite()
            && v_cfg.height > 0.0)
        {
            return Err(LayoutError::Config(format!(
                "viewport must have positive dimensions, got {}x{}",
                v_cfg.width, v_cfg.height
            )));
        }
        let viewport = Viewport {
            width: v_cfg.width,
            height: v_cfg.height,
        };

        // Nodes: map `NodeConfig` -> runtime `Node`, building the arena
        // index as we go
        let mut nodes = Vec::with_capacity(cfg.nodes.len());
        let mut index = HashMap::with_capacity(cfg.nodes.len());
        for (i, nc) in cfg.nodes.into_iter().enumerate() {
            if !(0.0..=1.0).contains(&nc.stress) {
                return Err(LayoutError::Scenario(format!(
                    "node {}: stress must be in [0, 1], got {}",
                    nc.id, nc.stress
                )));
            }
            if index.insert(nc.id.clone(), i).is_some() {
                return Err(LayoutError::Scenario(format!(
                    "duplicate node id: {}",
                    nc.id
                )));
            }
            nodes.push(node_from_config(nc));
        }

        // Edges: resolve ids to indices; both endpoints must exist
        let mut edges = Vec::with_capacity(cfg.edges.len());
        for ec in &cfg.edges {
            let source = *index
                .get(&ec.source)
                .ok_or_else(|| LayoutError::UnknownNode(ec.source.clone()))?;
            let target = *index
                .get(&ec.target)
                .ok_or_else(|| LayoutError::UnknownNode(ec.target.clone()))?;
            edges.push(Edge { source, target });
        }

        // Initial network state at t = 0
        let network = Network {
            nodes,
            edges,
            shockwaves: Vec::new(),
            viewport,
            t: 0.0,
        };

        // Forces: the four field terms, constants taken from parameters
        let forces = ForceSet::new()
            .with(Repulsion {
                k: parameters.k_repulsion,
                stress_threshold: parameters.stress_threshold,
            })
            .with(SpringNetwork {
                k: parameters.k_spring,
                rest_length: parameters.rest_length,
            })
            .with(BoundaryContainment {
                margin: parameters.boundary_margin,
                strength: parameters.boundary_strength,
            })
            .with(ShockwaveField {
                decay: parameters.shock_decay,
            });

        let initial = network.nodes.clone();
        let rng = StdRng::seed_from_u64(parameters.seed);

        Ok(Simulator {
            parameters,
            network,
            forces,
            index,
            initial,
            rng,
            running: true,
            accumulator: 0.0,
        })
    }
}

fn node_from_config(nc: NodeConfig) -> Node {
    let label = nc.label.unwrap_or_else(|| nc.id.clone());
    Node {
        id: nc.id,
        kind: nc.kind,
        label,
        x: NVec2::new(nc.x, nc.y),
        v: NVec2::zeros(),
        stress: nc.stress,
        pinned: false,
    }
}
