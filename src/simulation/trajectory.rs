//! Per-body position history
//!
//! One entry is pushed per integration step, before the position moves.
//! By default nothing is ever evicted; a window policy keeps only the most
//! recent positions for long runs.

use std::collections::VecDeque;

use super::states::NVec3;

/// How much history a trajectory keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// Keep every position ever recorded
    #[default]
    Unbounded,
    /// Keep at most this many of the latest positions
    Window(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: VecDeque<NVec3>,
    retention: Retention,
}

impl Trajectory {
    pub fn with_retention(retention: Retention) -> Self {
        Self {
            points: VecDeque::new(),
            retention,
        }
    }

    /// Change the policy, trimming existing history if it no longer fits
    pub fn set_retention(&mut self, retention: Retention) {
        self.retention = retention;
        self.evict();
    }

    pub fn retention(&self) -> Retention {
        self.retention
    }

    pub fn push(&mut self, p: NVec3) {
        self.points.push_back(p);
        self.evict();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&NVec3> {
        self.points.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec3> {
        self.points.iter()
    }

    /// Consecutive point pairs, the line segments a path renderer draws
    pub fn segments(&self) -> impl Iterator<Item = (&NVec3, &NVec3)> {
        self.points.iter().zip(self.points.iter().skip(1))
    }

    fn evict(&mut self) {
        if let Retention::Window(cap) = self.retention {
            while self.points.len() > cap {
                self.points.pop_front();
            }
        }
    }
}
