pub mod simulation;
pub mod configuration;
pub mod error;
pub mod benchmark;

pub use simulation::states::{
    Edge, NVec2, Network, Node, NodeKind, Shockwave, Viewport,
};
pub use simulation::states::{EdgeSnapshot, NodeSnapshot, ShockwaveSnapshot, Snapshot};
pub use simulation::forces::{
    BoundaryContainment, Force, ForceSet, Repulsion, ShockwaveField, SpringNetwork,
};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::params::Parameters;
pub use simulation::stats::{compute_stats, Stats, ENTROPY_EPS};
pub use simulation::engine::Simulator;

pub use configuration::config::{
    EdgeConfig, NodeConfig, ParametersConfig, ScenarioConfig, ViewportConfig,
};

pub use error::{LayoutError, LayoutResult};

pub use benchmark::benchmark::{bench_forces, bench_step};
