//! Bounded trajectory buffers
//!
//! Each body records a down-sampled trace of its positions. The buffer is
//! append-only and has a fixed capacity; appends beyond it are rejected
//! instead of overwriting earlier samples.

use crate::error::{Result, SimError};
use super::states::NVec2;

/// Number of samples each body can record in one run
pub const TRAJECTORY_CAPACITY: usize = 2000;

#[derive(Debug, Clone)]
pub struct Trajectory {
    samples: Vec<NVec2>,
    capacity: usize,
}

impl Trajectory {
    /// Empty buffer with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(TRAJECTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one position sample
    /// Fails with `TrajectoryFull` once `capacity` samples are stored
    pub fn push(&mut self, x: NVec2) -> Result<()> {
        if self.is_full() {
            return Err(SimError::TrajectoryFull { capacity: self.capacity });
        }
        self.samples.push(x);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn samples(&self) -> &[NVec2] {
        &self.samples
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.samples.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.samples.iter()
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Exported trace of one body: identity plus its recorded samples
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySeries {
    pub name: String,
    pub color: String,
    pub samples: Vec<NVec2>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rejects_beyond_capacity() {
        let mut traj = Trajectory::with_capacity(3);
        for i in 0..3 {
            traj.push(NVec2::new(i as f64, 0.0)).unwrap();
        }
        assert!(traj.is_full());

        let err = traj.push(NVec2::new(9.0, 9.0)).unwrap_err();
        assert!(matches!(err, SimError::TrajectoryFull { capacity: 3 }));
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.last(), Some(&NVec2::new(2.0, 0.0)));
    }

    #[test]
    fn default_capacity_is_two_thousand() {
        let traj = Trajectory::default();
        assert_eq!(traj.capacity(), TRAJECTORY_CAPACITY);
        assert!(traj.is_empty());
    }
}
