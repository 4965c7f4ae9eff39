use std::time::Instant;

use crate::simulation::states::{Body, BodyId, NVec3, System};

/// Helper to build a deterministic system of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0e3,
            (i_f * 0.13).cos() * 5.0e3,
            (i_f * 0.07).sin() * 5.0e3,
        );

        bodies.push(Body::new(BodyId(i as u32), x, NVec3::zeros(), 1.0e20));
    }

    System::new(bodies)
}

/// Average wall time of one `step(1, dt)` in milliseconds
fn time_step(mut sys: System, steps: u32) -> f64 {
    // Warm-up
    sys.step(1, 2000.0);

    let t0 = Instant::now();
    for _ in 0..steps {
        sys.step(1, 2000.0);
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// Sequential vs. rayon force pass for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_force_pass() {
    println!("N,sequential_ms,parallel_ms");

    for n in [200, 400, 800, 1600, 3200, 6400] {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let template = make_system(n);
        let ms_seq = time_step(template.clone().with_parallel(false), steps);
        let ms_par = time_step(template.with_parallel(true), steps);

        println!("{},{:.6},{:.6}", n, ms_seq, ms_par);
    }
}
