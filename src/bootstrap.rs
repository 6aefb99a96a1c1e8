// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Process entry point wiring configuration, the evaluator job and stdio.

use tokio::io::{self, BufReader};
use tracing::info;

use crate::{command::EvaluatorJob, config::EngineConfig, driver, evaluator::RangeMaxEvaluator};

/// Main entry point for the application.
///
/// Reads `lo hi` pairs from stdin and writes `lo hi answer` lines to stdout.
pub async fn run() -> anyhow::Result<()> {
    // Load configuration from the environment (and .env, if present)
    let config = EngineConfig::from_env()?;
    info!(
        cache_capacity = config.cache_capacity.as_u64(),
        step_mode = %config.step_mode,
        record_shortcut = config.record_shortcut,
        upper_half_reduction = config.upper_half_reduction,
        "Starting collatz evaluator"
    );

    // Initialize the evaluator job
    let handle = EvaluatorJob::init(RangeMaxEvaluator::new(config));

    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    let answered = driver::solve(stdin, &mut stdout, &handle).await?;

    let stats = handle.stats().await?;
    info!(answered = answered, stats = %stats, "Finished");

    Ok(())
}
