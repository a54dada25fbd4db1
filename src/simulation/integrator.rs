//! Fixed-step time integrator for the layout network
//!
//! Semi-implicit Euler driven by [`ForceSet`] and [`Parameters`]:
//! velocity first, then damping and the velocity cap, then position.
//! The step always advances by the same logical `dt` regardless of host
//! frame timing; the scheduler decides *when* to call it.

use tracing::warn;

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{Network, NVec2};

/// Advance the network by one tick.
///
/// Pinned nodes are bypassed entirely: their position is owned by the
/// dragging layer until release. Non-finite positions or velocities are
/// state corruption and would poison the whole field through the
/// repulsion term on the next pass, so the affected node is re-seated at
/// the viewport center with zero velocity instead.
pub fn semi_implicit_euler(net: &mut Network, forces: &ForceSet, params: &Parameters) {
    let n = net.nodes.len();
    if n == 0 {
        // no nodes, still advance time
        net.t += params.dt;
        return;
    }

    let dt = params.dt;

    // accel[i] holds the summed field contribution for node i this tick
    let mut accel = vec![NVec2::zeros(); n];
    forces.accumulate(&*net, &mut accel);

    let center = net.viewport.center();

    for (node, a) in net.nodes.iter_mut().zip(accel.iter()) {
        if node.pinned {
            continue;
        }

        // v_n+1 = (v_n + a dt) * damping, capped at max_velocity
        node.v += *a * dt;
        node.v *= params.damping;

        let speed = node.v.norm();
        if speed > params.max_velocity {
            // rescale to the cap, preserving direction
            node.v *= params.max_velocity / speed;
        }

        // x_n+1 = x_n + v_n+1 dt
        node.x += node.v * dt;

        let finite = node.x.x.is_finite()
            && node.x.y.is_finite()
            && node.v.x.is_finite()
            && node.v.y.is_finite();
        if !finite {
            warn!(id = %node.id, "non-finite state after integration, re-seating node");
            node.x = center;
            node.v = NVec2::zeros();
        }
    }

    // Increment the network time by one full step
    net.t += dt;
}
