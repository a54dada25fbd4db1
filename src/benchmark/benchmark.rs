use std::time::Instant;

use crate::simulation::forces::{
    BoundaryContainment, ForceSet, Repulsion, ShockwaveField, SpringNetwork,
};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Edge, Network, NVec2, Node, NodeKind, Viewport};

/// Helper to build a network of size `n` scattered across the viewport
fn make_network(n: usize) -> Network {
    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    let mut nodes = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            400.0 + (i_f * 0.37).sin() * 300.0,
            300.0 + (i_f * 0.13).cos() * 200.0,
        );

        nodes.push(Node {
            id: format!("n{i}"),
            kind: NodeKind::Service,
            label: format!("n{i}"),
            x,
            v: NVec2::zeros(),
            stress: (i_f * 0.07).sin().abs(),
            pinned: false,
        });
    }

    // Chain the nodes so the spring term has work to do
    let edges = (1..n)
        .map(|i| Edge {
            source: i - 1,
            target: i,
        })
        .collect();

    Network {
        nodes,
        edges,
        shockwaves: Vec::new(),
        viewport,
        t: 0.0,
    }
}

fn make_forces(params: &Parameters) -> ForceSet {
    ForceSet::new()
        .with(Repulsion {
            k: params.k_repulsion,
            stress_threshold: params.stress_threshold,
        })
        .with(SpringNetwork {
            k: params.k_spring,
            rest_length: params.rest_length,
        })
        .with(BoundaryContainment {
            margin: params.boundary_margin,
            strength: params.boundary_strength,
        })
        .with(ShockwaveField {
            decay: params.shock_decay,
        })
}

/// Time one full force accumulation for a range of network sizes.
/// The repulsion term dominates; growth should track n^2.
pub fn bench_forces() {
    let ns = [25, 50, 100, 200, 400, 800];
    let params = Parameters::default();

    println!("n,force_pass_ms");
    for n in ns {
        let net = make_network(n);
        let forces = make_forces(&params);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        forces.accumulate(&net, &mut out);

        let t0 = Instant::now();
        forces.accumulate(&net, &mut out);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{n},{ms:.6}");
    }
}

/// Time the full integration step (forces + integrate) averaged over a
/// few ticks per size.
pub fn bench_step() {
    let ns = [25, 50, 100, 200, 400, 800];
    let steps = 10;
    let params = Parameters::default();

    println!("n,step_ms");
    for n in ns {
        let mut net = make_network(n);
        let forces = make_forces(&params);

        // Warm up
        semi_implicit_euler(&mut net, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            semi_implicit_euler(&mut net, &forces, &params);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
