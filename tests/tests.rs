use approx::assert_relative_eq;

use starsim::{Body, BodyId, NVec3, NewtonianGravity, PointMass, Retention, SoftenedDistance, System, E, G};

/// Build a body from plain arrays
pub fn body(id: u32, x: [f64; 3], v: [f64; 3], m: f64) -> Body {
    Body::new(BodyId(id), x.into(), v.into(), m)
}

/// Two equal masses mirrored about the origin along the x-axis
pub fn mirrored_pair(dist: f64, m: f64) -> System {
    System::new(vec![
        body(1, [-dist / 2.0, 0.0, 0.0], [0.0, 0.0, 0.0], m),
        body(2, [dist / 2.0, 0.0, 0.0], [0.0, 0.0, 0.0], m),
    ])
}

/// Three bodies in general position with some initial motion
pub fn three_body_system() -> System {
    System::new(vec![
        body(10, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 2.0e20),
        body(11, [40.0, 5.0, -3.0], [0.0, 1.0e-3, 0.0], 1.0e19),
        body(12, [-25.0, 30.0, 8.0], [2.0e-3, 0.0, -1.0e-3], 5.0e18),
    ])
}

// ==================================================================================
// Vector / softening tests
// ==================================================================================

#[test]
fn distance_adds_softening_constant() {
    let zero = NVec3::zeros();
    assert_eq!(zero.distance(), E * E);

    let r = NVec3::new(1.0, 2.0, 3.0);
    assert_eq!(r.distance(), 1.0 + 4.0 + 9.0 + E * E);
}

#[test]
fn distance_is_always_above_softening() {
    let r = NVec3::new(-1.0e-9, 3.0e-12, 0.0);
    assert!(r.distance() >= E * E);
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn lone_body_feels_no_self_force() {
    let mut sys = System::new(vec![body(1, [3.0, -2.0, 7.0], [0.0, 0.0, 0.0], 5.0e24)]);
    sys.step(1, 1.0);

    // r = 0 for the self term, so it contributes nothing despite the softening
    assert_eq!(sys.bodies()[0].acceleration, NVec3::zeros());
    assert_eq!(sys.bodies()[0].position, NVec3::new(3.0, -2.0, 7.0));
}

#[test]
fn gravity_matches_softened_formula() {
    let gravity = NewtonianGravity::default();
    let sources = [
        PointMass { x: NVec3::zeros(), m: 1.0e20 },
        PointMass { x: NVec3::new(10.0, 0.0, 0.0), m: 3.0e20 },
    ];

    let a = gravity.acceleration(&sources[0].x, &sources);

    let r = NVec3::new(10.0, 0.0, 0.0);
    let d = r.distance();
    let expected = G * 3.0e20 * 10.0 / (d * d.sqrt());
    assert_relative_eq!(a.x, expected, max_relative = 1e-14);
    assert_eq!(a.y, 0.0);
    assert_eq!(a.z, 0.0);
}

#[test]
fn gravity_points_toward_other_body() {
    let gravity = NewtonianGravity::default();
    let sys = three_body_system();
    let sources: Vec<PointMass> = sys.bodies().iter().map(PointMass::from).collect();

    // Only the heavy central body matters much for body 11
    let a = gravity.acceleration(&sys.bodies()[1].position, &sources);
    let toward_center = sys.bodies()[0].position - sys.bodies()[1].position;
    assert!(a.dot(&toward_center) > 0.0, "acceleration not toward central body");
}

#[test]
fn update_acceleration_includes_every_source() {
    let gravity = NewtonianGravity::default();
    let mut b = body(1, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0);
    let sources = [
        PointMass::from(&b),
        PointMass { x: NVec3::new(0.0, 5.0, 0.0), m: 1.0e18 },
        PointMass { x: NVec3::new(0.0, -5.0, 0.0), m: 1.0e18 },
    ];

    b.update_acceleration(&sources, &gravity);

    // Opposing pulls cancel exactly
    assert_eq!(b.acceleration.y, 0.0);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn first_velocity_update_is_half_kick() {
    let dt = 3.0;
    let mut sys = mirrored_pair(10.0, 1.0e20);
    sys.step(1, dt);

    for b in sys.bodies() {
        assert_eq!(b.velocity, b.acceleration * (dt / 2.0));
    }
}

#[test]
fn velocity_lags_one_step() {
    let dt = 2.0;
    let v0 = NVec3::new(1.0, 2.0, 3.0);
    let mut sys = System::new(vec![body(1, [0.0, 0.0, 0.0], [1.0, 2.0, 3.0], 1.0)]);

    // No previous displacement yet: the body moves, then its velocity drops to zero
    sys.step(1, dt);
    assert_eq!(sys.bodies()[0].position, v0 * dt);
    assert_eq!(sys.bodies()[0].velocity, NVec3::zeros());

    // Standing still for a step, velocity rebuilt from the last displacement
    sys.step(1, dt);
    assert_eq!(sys.bodies()[0].position, v0 * dt);
    assert_eq!(sys.bodies()[0].velocity, v0);

    sys.step(1, dt);
    assert_eq!(sys.bodies()[0].position, v0 * dt * 2.0);
    assert_eq!(sys.bodies()[0].previous_displacement, v0 * dt);
}

#[test]
fn integrate_records_position_before_moving() {
    let mut b = body(1, [1.0, 1.0, 1.0], [1.0, 0.0, 0.0], 1.0);
    b.integrate(1.0);

    assert_eq!(b.trajectory.len(), 1);
    assert_eq!(b.trajectory.last(), Some(&NVec3::new(1.0, 1.0, 1.0)));
    assert_eq!(b.position, NVec3::new(2.0, 1.0, 1.0));
}

// ==================================================================================
// System stepping tests
// ==================================================================================

#[test]
fn zero_iterations_is_a_no_op() {
    let mut sys = three_body_system();
    let before = sys.clone();

    sys.step(0, 1000.0);

    assert_eq!(sys.iterations, 0);
    assert_eq!(sys.t, 0.0);
    for (a, b) in sys.bodies().iter().zip(before.bodies()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.acceleration, b.acceleration);
        assert!(a.trajectory.is_empty());
    }
}

#[test]
fn steps_compose() {
    let dt = 500.0;
    let mut split = three_body_system();
    let mut whole = three_body_system();

    split.step(3, dt);
    split.step(4, dt);
    whole.step(7, dt);

    assert_eq!(split.iterations, whole.iterations);
    for (a, b) in split.bodies().iter().zip(whole.bodies()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.previous_displacement, b.previous_displacement);
    }
}

#[test]
fn trajectory_grows_once_per_iteration() {
    let mut sys = three_body_system();
    sys.step(5, 100.0);
    sys.step(2, 100.0);

    for b in sys.bodies() {
        assert_eq!(b.trajectory.len(), 7);
    }
}

#[test]
fn mirrored_pair_stays_symmetric() {
    let mut sys = mirrored_pair(20.0, 1.0e20);

    for _ in 0..50 {
        sys.step(1, 10.0);
        let (a, b) = (&sys.bodies()[0], &sys.bodies()[1]);
        assert_eq!(a.position, -b.position);
        assert_eq!(a.velocity, -b.velocity);
    }
}

#[test]
fn pair_attracts_by_equal_amounts() {
    let mut sys = System::new(vec![
        body(1, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0e20),
        body(2, [10.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0e20),
    ]);
    sys.step(1, 1.0);

    let moved_1 = sys.bodies()[0].position.x - 0.0;
    let moved_2 = sys.bodies()[1].position.x - 10.0;
    assert!(moved_1 > 0.0);
    assert!(moved_2 < 0.0);
    assert_relative_eq!(moved_1, -moved_2, max_relative = 1e-12);
}

#[test]
fn parallel_and_sequential_agree() {
    let mut par = three_body_system().with_parallel(true);
    let mut seq = three_body_system().with_parallel(false);

    par.step(20, 250.0);
    seq.step(20, 250.0);

    for (a, b) in par.bodies().iter().zip(seq.bodies()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
    }
}

#[test]
fn body_order_and_identity_are_stable() {
    let mut sys = three_body_system();
    sys.step(10, 1000.0);

    let ids: Vec<u32> = sys.bodies().iter().map(|b| b.id.0).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_eq!(sys.bodies()[0].mass, 2.0e20);
    assert_eq!(sys.len(), 3);
}

#[test]
fn time_and_iteration_counters_advance() {
    let mut sys = mirrored_pair(10.0, 1.0);
    sys.step(4, 0.5);
    assert_eq!(sys.iterations, 4);
    assert_eq!(sys.t, 2.0);
}

// ==================================================================================
// Trajectory retention tests
// ==================================================================================

#[test]
fn window_retention_keeps_latest_points() {
    let mut sys = System::new(vec![body(1, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], 1.0)])
        .with_retention(Retention::Window(3));

    sys.step(10, 1.0);

    let b = &sys.bodies()[0];
    assert_eq!(b.trajectory.len(), 3);
    assert_eq!(b.trajectory.retention(), Retention::Window(3));
    assert_eq!(b.trajectory.segments().count(), 2);
}

#[test]
fn unbounded_retention_is_default() {
    let mut sys = mirrored_pair(10.0, 1.0);
    sys.step(100, 1.0);
    assert_eq!(sys.bodies()[0].trajectory.retention(), Retention::Unbounded);
    assert_eq!(sys.bodies()[0].trajectory.len(), 100);
    assert_eq!(sys.bodies()[0].trajectory.iter().next(), Some(&NVec3::new(-5.0, 0.0, 0.0)));
}
