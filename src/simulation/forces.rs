//! Gravitational acceleration for the n-body engine
//!
//! Direct summation over a snapshot of point masses. The sum runs over
//! every source, including the body being evaluated.

use crate::simulation::states::{Body, NVec3, SoftenedDistance, SOFTENING};

/// Gravitational constant used by the reference simulation
pub const G: f64 = 6.6738480e-11;

/// Position and mass of one body, frozen for a force pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub x: NVec3,
    pub m: f64,
}

impl From<&Body> for PointMass {
    fn from(b: &Body) -> Self {
        Self {
            x: b.position,
            m: b.mass,
        }
    }
}

/// Newtonian gravity with additive softening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening added to every squared distance
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self {
            g: G,
            eps2: SOFTENING,
        }
    }
}

impl NewtonianGravity {
    /// Acceleration at `at` from every source:
    /// a = G * sum_j r_j * (m_j / d_j^1.5), with r_j = x_j - at and
    /// d_j = |r_j|^2 + eps2
    ///
    /// A source sitting exactly at `at` contributes the zero vector, so the
    /// self term only matters for non-finite masses.
    pub fn acceleration(&self, at: &NVec3, sources: &[PointMass]) -> NVec3 {
        let mut a = NVec3::zeros();
        for s in sources {
            let r = s.x - at;
            let dist = r.softened_norm_squared(self.eps2);

            // d^1.5 as dist * sqrt(dist), not powf
            a += r * (s.m / (dist * dist.sqrt()));
        }
        a * self.g
    }
}
