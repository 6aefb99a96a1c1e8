// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Trajectory walks with early termination.

use crate::errors::TrajectoryError;
use crate::stepper::{step, StepMode};

/// A value visited during a walk and its distance from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryPoint {
    /// The visited value
    pub value: u64,
    /// Collatz steps from the start value to this one
    pub offset: u32,
}

/// The path walked from a start value to a value of known length.
///
/// The last point is the terminal: either 1 or a value whose length was
/// already known when the walk reached it. Every recorded point's length is
/// then `(terminal offset - point offset) + terminal length`.
///
/// Combined steps advance the offset by two and never record the skipped
/// `3n + 1`, so a trajectory may hold fewer points than its step count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
    terminal_length: u32,
}

impl Trajectory {
    /// Walk from `start` until reaching 1 or a value for which `known` returns a length.
    ///
    /// `known` is consulted for every recorded value, the start included, and
    /// never for the implicit intermediate of a combined step.
    ///
    /// # Errors
    ///
    /// Propagates [`TrajectoryError`] from the stepper (zero start, overflow).
    pub fn walk<F>(start: u64, mode: StepMode, mut known: F) -> Result<Self, TrajectoryError>
    where
        F: FnMut(u64) -> Option<u32>,
    {
        if start == 0 {
            return Err(TrajectoryError::NonPositive);
        }

        let mut points = vec![TrajectoryPoint {
            value: start,
            offset: 0,
        }];
        let mut current = TrajectoryPoint {
            value: start,
            offset: 0,
        };

        let terminal_length = loop {
            if let Some(length) = known(current.value) {
                break length;
            }
            if current.value == 1 {
                break 1;
            }
            let next = step(current.value, mode)?;
            current = TrajectoryPoint {
                value: next.value,
                offset: current.offset + next.steps,
            };
            points.push(current);
        };

        Ok(Self {
            points,
            terminal_length,
        })
    }

    /// The value the walk started from
    pub fn start(&self) -> u64 {
        self.points[0].value
    }

    /// The value the walk stopped at
    pub fn terminal(&self) -> u64 {
        self.points[self.points.len() - 1].value
    }

    /// Length of the terminal value
    pub fn terminal_length(&self) -> u32 {
        self.terminal_length
    }

    /// Steps taken from the start to the terminal
    pub fn total_steps(&self) -> u32 {
        self.points[self.points.len() - 1].offset
    }

    /// `L(start)`
    pub fn start_length(&self) -> u32 {
        self.total_steps() + self.terminal_length
    }

    /// Recorded points, start first
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Every recorded value paired with its trajectory length
    pub fn lengths(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        let total = self.total_steps();
        self.points
            .iter()
            .map(move |p| (p.value, total - p.offset + self.terminal_length))
    }

    /// Number of recorded points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A trajectory always records at least its start
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::trajectory_length;

    #[test]
    fn test_walk_to_one() {
        let trajectory = Trajectory::walk(9, StepMode::Plain, |_| None).unwrap();
        assert_eq!(trajectory.start(), 9);
        assert_eq!(trajectory.terminal(), 1);
        assert_eq!(trajectory.len(), 20);
        assert_eq!(trajectory.total_steps(), 19);
        assert_eq!(trajectory.start_length(), 20);
    }

    #[test]
    fn test_walk_from_one() {
        let trajectory = Trajectory::walk(1, StepMode::Combined, |_| None).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.start_length(), 1);
        assert_eq!(trajectory.lengths().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn test_walk_stops_at_known_value() {
        // 7 -> 22 -> 11 -> 34 -> 17 -> ...; pretend 11 is known
        let trajectory = Trajectory::walk(7, StepMode::Plain, |v| {
            (v == 11).then(|| trajectory_length(11).unwrap())
        })
        .unwrap();
        assert_eq!(trajectory.terminal(), 11);
        assert_eq!(trajectory.total_steps(), 2);
        assert_eq!(trajectory.start_length(), 17);
    }

    #[test]
    fn test_known_start_yields_single_point() {
        let trajectory = Trajectory::walk(27, StepMode::Plain, |_| Some(112)).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.start_length(), 112);
    }

    #[test]
    fn test_combined_walk_skips_intermediates() {
        let plain = Trajectory::walk(27, StepMode::Plain, |_| None).unwrap();
        let combined = Trajectory::walk(27, StepMode::Combined, |_| None).unwrap();
        assert_eq!(plain.start_length(), combined.start_length());
        assert!(combined.len() < plain.len());

        // Every combined point carries the same length the plain walk gives it
        let plain_lengths: std::collections::HashMap<u64, u32> = plain.lengths().collect();
        for (value, length) in combined.lengths() {
            assert_eq!(plain_lengths.get(&value), Some(&length), "value {value}");
        }
    }

    #[test]
    fn test_combined_walk_never_probes_skipped_value() {
        // 3 -> (10) -> 5; a combined walk must not ask about 10
        let mut probed = Vec::new();
        Trajectory::walk(3, StepMode::Combined, |v| {
            probed.push(v);
            None
        })
        .unwrap();
        assert!(!probed.contains(&10));
        assert!(probed.contains(&5));
    }

    #[test]
    fn test_lengths_match_reference() {
        let trajectory = Trajectory::walk(97, StepMode::Plain, |_| None).unwrap();
        for (value, length) in trajectory.lengths() {
            assert_eq!(length, trajectory_length(value).unwrap());
        }
    }

    #[test]
    fn test_zero_start_rejected() {
        assert_eq!(
            Trajectory::walk(0, StepMode::Plain, |_| None),
            Err(TrajectoryError::NonPositive)
        );
    }
}
