//! Fixed-step integration of a single body
//!
//! The velocity update is lagged one step: it is rebuilt from the
//! displacement of the *previous* call plus a half-step kick, not from the
//! displacement just applied. Reordering any of the steps below changes
//! every trajectory.

use super::states::Body;

/// Advance `b` by one step of length `dt` using its current acceleration.
///
/// 1. delta = v dt + a dt^2 / 2
/// 2. record the pre-step position
/// 3. x += delta
/// 4. v = previous_delta / dt + a dt / 2
/// 5. previous_delta = delta
pub fn lagged_velocity_step(b: &mut Body, dt: f64) {
    let delta = b.velocity * dt + b.acceleration * ((dt * dt) / 2.0);

    b.trajectory.push(b.position);
    b.position += delta;

    // uses last step's displacement; zero on the first call
    b.velocity = b.previous_displacement / dt + b.acceleration * (dt / 2.0);
    b.previous_displacement = delta;
}
