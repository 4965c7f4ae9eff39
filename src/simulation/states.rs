//! Core state types for the N-body simulation.
//!
//! - `NVec3` is the 3d value type used for position, velocity, acceleration
//!   and displacement, with a softened squared-distance metric
//! - `Body` is one point mass with its kinematic state and trajectory
//! - `System` owns the ordered, fixed-size ensemble and drives stepping

use nalgebra::Vector3;
use rayon::prelude::*;
use tracing::debug;

use super::forces::{NewtonianGravity, PointMass};
use super::integrator::lagged_velocity_step;
use super::presentation::{PresentationTags, TagSource};
use super::trajectory::{Retention, Trajectory};

pub type NVec3 = Vector3<f64>;

/// Euler's number, whose square is the softening constant
pub const E: f64 = 2.71828182845904523536;

/// Softening constant e^2 added to every squared distance
pub const SOFTENING: f64 = E * E;

/// Squared-distance metric with an additive softening term
pub trait SoftenedDistance {
    /// `x^2 + y^2 + z^2 + eps2`
    fn softened_norm_squared(&self, eps2: f64) -> f64;

    /// `x^2 + y^2 + z^2 + e^2`, never below e^2 for finite input
    fn distance(&self) -> f64 {
        self.softened_norm_squared(SOFTENING)
    }
}

impl SoftenedDistance for NVec3 {
    fn softened_norm_squared(&self, eps2: f64) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + eps2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub position: NVec3,
    pub velocity: NVec3,
    pub acceleration: NVec3,
    pub previous_displacement: NVec3, // displacement applied by the last integrate call
    pub mass: f64,
    pub trajectory: Trajectory,
    pub tags: PresentationTags,
}

impl Body {
    /// A body at rest with no history yet. Acceleration and previous
    /// displacement start at zero.
    pub fn new(id: BodyId, position: NVec3, velocity: NVec3, mass: f64) -> Self {
        Self {
            id,
            position,
            velocity,
            acceleration: NVec3::zeros(),
            previous_displacement: NVec3::zeros(),
            mass,
            trajectory: Trajectory::default(),
            tags: PresentationTags::default(),
        }
    }

    /// Overwrite `acceleration` with the pull of every source, this body's
    /// own snapshot included.
    pub fn update_acceleration(&mut self, sources: &[PointMass], gravity: &NewtonianGravity) {
        self.acceleration = gravity.acceleration(&self.position, sources);
    }

    /// Advance position and velocity by `dt` from the current acceleration
    pub fn integrate(&mut self, dt: f64) {
        lagged_velocity_step(self, dt);
    }
}

#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>, // load order, never resized after construction
    gravity: NewtonianGravity,
    parallel: bool, // rayon force pass
    pub t: f64, // simulated time
    pub iterations: u64, // completed iterations
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            gravity: NewtonianGravity::default(),
            parallel: true,
            t: 0.0,
            iterations: 0,
        }
    }

    pub fn with_gravity(mut self, gravity: NewtonianGravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Apply a trajectory retention policy to every body
    pub fn with_retention(mut self, retention: Retention) -> Self {
        for b in self.bodies.iter_mut() {
            b.trajectory.set_retention(retention);
        }
        self
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    /// Run `iterations` force + integration passes with a fixed `dt`.
    ///
    /// Each force pass reads a snapshot of the positions and masses taken
    /// before any body moves, so no body sees a partially updated state.
    pub fn step(&mut self, iterations: u32, dt: f64) {
        debug!(iterations, dt, bodies = self.bodies.len(), "advancing system");

        for _ in 0..iterations {
            let sources: Vec<PointMass> = self.bodies.iter().map(PointMass::from).collect();
            let gravity = &self.gravity;

            // Force pass: each body writes only its own acceleration
            if self.parallel {
                self.bodies
                    .par_iter_mut()
                    .for_each(|b| b.update_acceleration(&sources, gravity));
            } else {
                for b in self.bodies.iter_mut() {
                    b.update_acceleration(&sources, gravity);
                }
            }

            // Integration pass, strictly after every acceleration is known
            for b in self.bodies.iter_mut() {
                b.integrate(dt);
            }

            self.t += dt;
            self.iterations += 1;
        }
    }

    /// Fetch one tag set per body, in load order
    pub fn assign_presentation_tags<S: TagSource + ?Sized>(&mut self, source: &mut S) {
        for b in self.bodies.iter_mut() {
            b.tags = source.next_tags();
        }
    }
}
