//! Core state types for the layout simulation.
//!
//! Defines the node/edge/shockwave structs and the `Network` container
//! that owns them, plus the `Snapshot` types handed to consumers.
//!
//! The network holds the full mutable collection of nodes, edges and
//! active shockwaves and the current simulation time `t`. Consumers only
//! ever see `Snapshot` copies.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::simulation::stats::Stats;

pub type NVec2 = Vector2<f64>;

/// Category of a network node. Closed set; scenario files use the
/// lowercase names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Server,
    Database,
    Service,
    Gateway,
    Client,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String, // unique, stable
    pub kind: NodeKind,
    pub label: String, // display text, opaque to the simulation
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub stress: f64, // scalar in [0, 1]
    pub pinned: bool, // true while externally dragged
}

impl Node {
    /// Mass derived from stress. Always >= 1.
    pub fn mass(&self) -> f64 {
        1.0 + self.stress * 0.5
    }
}

/// Undirected connection between two nodes, stored as resolved indices
/// into the node arena. Immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

/// Transient impulse source. Ages by one per tick and is pruned once its
/// decayed magnitude falls under the configured floor or its age exceeds
/// the tick ceiling.
#[derive(Debug, Clone)]
pub struct Shockwave {
    pub origin: NVec2,
    pub force: f64, // initial magnitude
    pub age: u32, // ticks since creation
}

impl Shockwave {
    /// Decayed magnitude at the current age: `force * decay^age`.
    pub fn magnitude(&self, decay: f64) -> f64 {
        self.force * decay.powi(self.age as i32)
    }
}

/// Rectangle the layout is contained in. Supplied by the hosting layer,
/// updatable through a resize notification.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Single source of truth for the simulation state.
#[derive(Debug, Clone)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub shockwaves: Vec<Shockwave>,
    pub viewport: Viewport,
    pub t: f64, // elapsed simulated time
}

impl Network {
    /// Copy the current state into an owned snapshot for consumers.
    /// `decay` is needed to report each shockwave's decayed magnitude.
    pub fn snapshot(&self, stats: Stats, decay: f64) -> Snapshot {
        Snapshot {
            nodes: self
                .nodes
                .iter()
                .map(|n| NodeSnapshot {
                    id: n.id.clone(),
                    kind: n.kind,
                    label: n.label.clone(),
                    x: n.x.x,
                    y: n.x.y,
                    vx: n.v.x,
                    vy: n.v.y,
                    stress: n.stress,
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeSnapshot {
                    source: self.nodes[e.source].id.clone(),
                    target: self.nodes[e.target].id.clone(),
                })
                .collect(),
            shockwaves: self
                .shockwaves
                .iter()
                .map(|w| ShockwaveSnapshot {
                    x: w.origin.x,
                    y: w.origin.y,
                    magnitude: w.magnitude(decay),
                    age: w.age,
                })
                .collect(),
            stats,
        }
    }
}

/// Per-node state published each tick.
#[derive(Serialize, Debug, Clone)]
pub struct NodeSnapshot {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub stress: f64,
}

/// Edge pass-through as id pairs.
#[derive(Serialize, Debug, Clone)]
pub struct EdgeSnapshot {
    pub source: String,
    pub target: String,
}

/// Active shockwave, for diagnostic display only.
#[derive(Serialize, Debug, Clone)]
pub struct ShockwaveSnapshot {
    pub x: f64,
    pub y: f64,
    pub magnitude: f64,
    pub age: u32,
}

/// Owned copy of the publishable simulation state after one tick.
#[derive(Serialize, Debug, Clone)]
pub struct Snapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
    pub shockwaves: Vec<ShockwaveSnapshot>,
    pub stats: Stats,
}
