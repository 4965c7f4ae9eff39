pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, System, NVec3, SoftenedDistance, E, SOFTENING};
pub use simulation::forces::{NewtonianGravity, PointMass, G};
pub use simulation::integrator::lagged_velocity_step;
pub use simulation::trajectory::{Retention, Trajectory};
pub use simulation::presentation::{Color, PresentationTags, RandomTags, TagSource, TextureHandle};
pub use simulation::dump::{body_line, format_general, VecDisplay};
pub use simulation::scenario::Scenario;

pub use configuration::config::{RunConfig, EngineConfig, ParametersConfig, TrajectoryConfig, PresentationConfig, ConfigError};
pub use configuration::input::{read_bodies, parse_record, LoadError};

pub use benchmark::benchmark::bench_force_pass;
