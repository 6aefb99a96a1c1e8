// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Precomputed Collatz record holders.
//!
//! A record holder is the smallest starting value whose trajectory is longer
//! than that of every smaller starting value. Because each record holder sets
//! a new prefix maximum, the longest trajectory over `[1, u]` is the length of
//! the largest record holder not exceeding `u`, which turns any range anchored
//! at 1 into a binary search.
//!
//! The table is only exact up to [`RecordTable::verified_through`]: past that
//! bound an unlisted record holder may exist, so lookups there return `None`.

use serde::{Deserialize, Serialize};

use crate::errors::RecordTableError;

/// Record holders below ten million as `(starting value, trajectory length)`
///
/// Lengths count both the start and the final 1.
pub const RECORD_HOLDERS: [(u64, u32); 54] = [
    (1, 1),
    (2, 2),
    (3, 8),
    (6, 9),
    (7, 17),
    (9, 20),
    (18, 21),
    (25, 24),
    (27, 112),
    (54, 113),
    (73, 116),
    (97, 119),
    (129, 122),
    (171, 125),
    (231, 128),
    (313, 131),
    (327, 144),
    (649, 145),
    (703, 171),
    (871, 179),
    (1_161, 182),
    (2_223, 183),
    (2_463, 209),
    (2_919, 217),
    (3_711, 238),
    (6_171, 262),
    (10_971, 268),
    (13_255, 276),
    (17_647, 279),
    (23_529, 282),
    (26_623, 308),
    (34_239, 311),
    (35_655, 324),
    (52_527, 340),
    (77_031, 351),
    (106_239, 354),
    (142_587, 375),
    (156_159, 383),
    (216_367, 386),
    (230_631, 443),
    (410_011, 449),
    (511_935, 470),
    (626_331, 509),
    (837_799, 525),
    (1_117_065, 528),
    (1_501_353, 531),
    (1_723_519, 557),
    (2_298_025, 560),
    (3_064_033, 563),
    (3_542_887, 584),
    (3_732_423, 597),
    (5_649_499, 613),
    (6_649_279, 665),
    (8_400_511, 686),
];

/// Largest starting value for which [`RECORD_HOLDERS`] is complete
pub const RECORD_HOLDERS_VERIFIED_THROUGH: u64 = 9_999_999;

/// One record holder and its trajectory length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Smallest starting value reaching `length`
    pub start: u64,
    /// Maximum trajectory length over `[1, start]`
    pub length: u32,
}

impl From<(u64, u32)> for RecordEntry {
    fn from((start, length): (u64, u32)) -> Self {
        Self { start, length }
    }
}

/// Immutable, ascending table of record holders
///
/// # Examples
///
/// ```
/// use collatzscan::RecordTable;
///
/// let table = RecordTable::standard();
/// assert_eq!(table.lookup_prefix_max(10), Some(20));
/// assert_eq!(table.lookup_prefix_max(1_000_000), Some(525));
/// assert_eq!(table.holder_for(1_000_000).map(|r| r.start), Some(837_799));
///
/// // Past the verified bound the table cannot answer
/// assert_eq!(table.lookup_prefix_max(20_000_000), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    entries: Vec<RecordEntry>,
    verified_through: u64,
}

impl RecordTable {
    /// The built-in table of record holders below ten million
    pub fn standard() -> Self {
        Self {
            entries: RECORD_HOLDERS.iter().copied().map(RecordEntry::from).collect(),
            verified_through: RECORD_HOLDERS_VERIFIED_THROUGH,
        }
    }

    /// Build a table from caller-supplied entries
    ///
    /// `verified_through` is the largest `u` for which the entries are known to
    /// list every record holder in `[1, u]`.
    ///
    /// # Errors
    ///
    /// Rejects empty tables, tables not starting at 1, keys or lengths that are
    /// not strictly increasing, and a bound below the last key.
    pub fn from_entries(
        entries: Vec<RecordEntry>,
        verified_through: u64,
    ) -> Result<Self, RecordTableError> {
        let first = entries.first().ok_or(RecordTableError::Empty)?;
        if first.start != 1 {
            return Err(RecordTableError::FirstKeyNotOne { key: first.start });
        }
        if let Some(index) = entries
            .windows(2)
            .position(|w| w[1].start <= w[0].start || w[1].length <= w[0].length)
        {
            return Err(RecordTableError::NotAscending { index: index + 1 });
        }
        let last_key = entries[entries.len() - 1].start;
        if verified_through < last_key {
            return Err(RecordTableError::BoundBelowLastKey {
                verified_through,
                last_key,
            });
        }
        Ok(Self {
            entries,
            verified_through,
        })
    }

    /// The record holder governing `[1, upper]`
    ///
    /// Returns `None` when `upper` is below the first key or above
    /// [`verified_through`](Self::verified_through).
    pub fn holder_for(&self, upper: u64) -> Option<RecordEntry> {
        if upper > self.verified_through {
            return None;
        }
        let idx = self.entries.partition_point(|e| e.start <= upper);
        idx.checked_sub(1).map(|i| self.entries[i])
    }

    /// `max{L(s) : 1 <= s <= upper}`, when the table can answer it
    pub fn lookup_prefix_max(&self, upper: u64) -> Option<u32> {
        self.holder_for(upper).map(|e| e.length)
    }

    /// The largest value the table is exact for
    pub fn verified_through(&self) -> u64 {
        self.verified_through
    }

    /// Prefix maximum over the whole verified span
    pub fn verified_max(&self) -> u32 {
        self.entries[self.entries.len() - 1].length
    }

    /// All record holders, ascending
    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    /// Number of record holders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::standard()
    }
}
