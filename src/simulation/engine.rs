//! High-level runtime engine settings
//!
//! Selects how the force pass is scheduled and how much trajectory
//! history each body keeps

use super::trajectory::Retention;

#[derive(Debug, Clone)]
pub struct Engine {
    pub parallel: bool, // false = sequential force pass, true = rayon
    pub threads: Option<usize>, // worker count, None = rayon default
    pub retention: Retention, // trajectory history policy
}
