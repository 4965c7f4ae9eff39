//! Build a ready-to-run simulation from configuration and loaded bodies
//!
//! Takes a `RunConfig` (YAML-facing) plus the bodies read from the record
//! stream and produces a `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, tags assigned)

use tracing::{debug, info};

use crate::configuration::config::RunConfig;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::presentation::RandomTags;
use crate::simulation::states::{Body, System};
use crate::simulation::trajectory::Retention;

/// The runtime bundle a driver (CLI or renderer) advances and reads from
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: RunConfig, bodies: Vec<Body>) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            iterations: p_cfg.iterations,
            G: p_cfg.G,
            eps2: p_cfg.eps2,
        };

        // Engine (runtime) from EngineConfig + TrajectoryConfig
        let engine = Engine {
            parallel: cfg.engine.parallel,
            threads: cfg.engine.threads,
            retention: match cfg.trajectory.window {
                Some(n) => Retention::Window(n),
                None => Retention::Unbounded,
            },
        };

        let mut system = System::new(bodies)
            .with_gravity(parameters.gravity())
            .with_parallel(engine.parallel)
            .with_retention(engine.retention);

        // Tags are assigned exactly once, right after load
        let mut tags = RandomTags::with_texture_count(cfg.presentation.seed, cfg.presentation.textures);
        system.assign_presentation_tags(&mut tags);

        info!(
            bodies = system.len(),
            dt = parameters.dt,
            iterations = parameters.iterations,
            parallel = engine.parallel,
            "scenario ready"
        );

        Self {
            engine,
            parameters,
            system,
        }
    }

    /// One advance: `parameters.iterations` iterations of `parameters.dt`
    pub fn advance(&mut self) {
        self.system.step(self.parameters.iterations, self.parameters.dt);
        debug!(t = self.system.t, iterations = self.system.iterations, "advanced");
    }
}
