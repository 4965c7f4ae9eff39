//! Numerical and physical parameters for a run
//!
//! `Parameters` holds the stepping settings:
//! - per-iteration duration and iterations per advance,
//! - gravitational constant and softening (`G`, `eps2`)

use super::forces::NewtonianGravity;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // seconds per iteration
    pub iterations: u32, // iterations per advance
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Parameters {
    pub fn gravity(&self) -> NewtonianGravity {
        NewtonianGravity {
            g: self.G,
            eps2: self.eps2,
        }
    }
}
