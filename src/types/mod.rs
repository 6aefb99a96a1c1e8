// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across collatzscan.
//!
//! This module provides newtype wrappers for domain concepts:
//! - Cache capacity (the exclusive upper bound on cacheable starting values)
//! - Normalized range queries

pub mod capacity;
pub mod query;

// Note: Public types are re-exported from lib.rs, not here
