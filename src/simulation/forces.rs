//! Force / acceleration contributors for the layout engine
//!
//! Defines the [`Force`] trait plus the four field terms: pairwise
//! repulsion, the edge spring network, boundary containment and the
//! transient shockwave field. Contributions are summed into a single
//! acceleration vector per node.

use crate::simulation::states::{Network, NVec2};

/// Collection of force terms.
/// Each term implements [`Force`] and their contributions are summed
/// into a single acceleration vector per node
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all nodes in `net`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate(&self, net: &Network, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all contributors
        for term in &self.terms {
            term.apply(net, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`Network`]
/// Implementations add their contribution into `out[i]` for each node
pub trait Force {
    fn apply(&self, net: &Network, out: &mut [NVec2]);
}

/// Pairwise inverse-square repulsion.
///
/// For every ordered pair of distinct nodes the pusher drives the other
/// node directly away with magnitude
/// `k * (1 + stress * stress_threshold) / (d + 1)^2`, so higher-stress
/// nodes push harder. The `+1` keeps the term finite at zero separation.
/// Direct n^2 summation; the target scale is tens of nodes.
pub struct Repulsion {
    pub k: f64, // repulsion constant
    pub stress_threshold: f64, // stress contribution factor
}

impl Force for Repulsion {
    fn apply(&self, net: &Network, out: &mut [NVec2]) {
        let n = net.nodes.len();
        if n == 0 {
            return;
        }

        for i in 0..n {
            let pusher = &net.nodes[i];
            // Stress scales how hard this node pushes everything else
            let stress_factor = 1.0 + pusher.stress * self.stress_threshold;

            for j in 0..n {
                if i == j {
                    continue;
                }

                // r points from the pusher toward node j
                let r = net.nodes[j].x - pusher.x;
                let d = r.norm();
                if d == 0.0 {
                    // Coincident nodes have no direction to push along
                    continue;
                }

                let mag = self.k * stress_factor / ((d + 1.0) * (d + 1.0));

                // Push j away from the pusher
                out[j] += r * (mag / d);
            }
        }
    }
}

/// Hookean attraction along each edge toward the rest length.
///
/// Magnitude `k * (d - rest_length)` pulls the source toward the target
/// with the equal-and-opposite reaction on the target. A zero-length
/// edge has no defined axis and is skipped.
pub struct SpringNetwork {
    pub k: f64, // spring constant
    pub rest_length: f64,
}

impl Force for SpringNetwork {
    fn apply(&self, net: &Network, out: &mut [NVec2]) {
        for e in &net.edges {
            // r points along the source -> target axis
            let r = net.nodes[e.target].x - net.nodes[e.source].x;
            let d = r.norm();
            if d == 0.0 {
                continue;
            }

            let dir = r / d;
            // Positive when stretched past rest length, negative when
            // compressed
            let mag = self.k * (d - self.rest_length);

            out[e.source] += dir * mag;
            out[e.target] -= dir * mag;
        }
    }
}

/// Soft containment keeping nodes inside the viewport.
///
/// Within `margin` of an edge a linear restoring force pushes back
/// toward the interior. Each axis is handled independently.
pub struct BoundaryContainment {
    pub margin: f64,
    pub strength: f64,
}

impl Force for BoundaryContainment {
    fn apply(&self, net: &Network, out: &mut [NVec2]) {
        let w = net.viewport.width;
        let h = net.viewport.height;

        for (node, a) in net.nodes.iter().zip(out.iter_mut()) {
            if node.x.x < self.margin {
                a.x += self.strength * (self.margin - node.x.x);
            }
            if node.x.x > w - self.margin {
                a.x -= self.strength * (node.x.x - (w - self.margin));
            }
            if node.x.y < self.margin {
                a.y += self.strength * (self.margin - node.x.y);
            }
            if node.x.y > h - self.margin {
                a.y -= self.strength * (node.x.y - (h - self.margin));
            }
        }
    }
}

/// Decaying inverse-square impulses from the active shockwaves.
///
/// Each wave pushes every node away from its origin with magnitude
/// `force * decay^age / (d + 1)^2`. Simultaneous waves superimpose
/// linearly. A node sitting exactly on the origin gets no contribution.
pub struct ShockwaveField {
    pub decay: f64, // geometric decay per tick of age
}

impl Force for ShockwaveField {
    fn apply(&self, net: &Network, out: &mut [NVec2]) {
        for wave in &net.shockwaves {
            let base = wave.magnitude(self.decay);

            for (node, a) in net.nodes.iter().zip(out.iter_mut()) {
                // r points away from the wave origin
                let r = node.x - wave.origin;
                let d = r.norm();
                if d == 0.0 {
                    continue;
                }

                let mag = base / ((d + 1.0) * (d + 1.0));
                *a += r * (mag / d);
            }
        }
    }
}
