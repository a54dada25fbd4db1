//! Aggregate physical statistics
//!
//! Pure reductions over the post-integration node/edge state, recomputed
//! every tick. Nothing here mutates the network.

use serde::Serialize;

use super::params::Parameters;
use super::states::Network;

/// Offset under the entropy logarithm so a fully settled network
/// (zero kinetic energy) stays finite.
pub const ENTROPY_EPS: f64 = 1e-6;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Sum over nodes of `1/2 * mass * |v|^2`.
    pub kinetic_energy: f64,
    /// Sum over edges of the absolute deviation from rest length.
    pub tension: f64,
    /// Disorder proxy: `-ln(avg kinetic energy per node + eps)`.
    pub network_entropy: f64,
}

/// Reduce the current network state into its per-tick statistics.
pub fn compute_stats(net: &Network, params: &Parameters) -> Stats {
    let kinetic_energy: f64 = net
        .nodes
        .iter()
        .map(|n| 0.5 * n.mass() * n.v.norm_squared())
        .sum();

    let tension: f64 = net
        .edges
        .iter()
        .map(|e| {
            let d = (net.nodes[e.target].x - net.nodes[e.source].x).norm();
            (d - params.rest_length).abs()
        })
        .sum();

    let avg_kinetic = if net.nodes.is_empty() {
        0.0
    } else {
        kinetic_energy / net.nodes.len() as f64
    };
    let network_entropy = -(avg_kinetic + ENTROPY_EPS).ln();

    Stats {
        kinetic_energy,
        tension,
        network_entropy,
    }
}
