// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Serialized access to one evaluator from many tasks.
//!
//! The evaluator is CPU-bound and mutably borrowed for the whole of a query,
//! so it is owned by a single job running on tokio's blocking pool, off the
//! async worker threads. Callers hold a cloneable
//! [`EvaluatorHandle`] and exchange [`Command`]s with the job over a bounded
//! channel; each command carries a oneshot responder for its reply.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

use crate::config::constants::COMMAND_CHANNEL_CAPACITY;
use crate::errors::{DriverError, EvaluationError};
use crate::evaluator::{EvaluatorStats, RangeMaxEvaluator};
use crate::types::query::RangeQuery;

type Responder<T> = oneshot::Sender<T>;

/// Owns a [`RangeMaxEvaluator`] and answers commands one at a time.
pub struct EvaluatorJob;

impl EvaluatorJob {
    /// Spawns the job on the current runtime's blocking pool and returns its handle.
    ///
    /// The job runs until every handle has been dropped. Runtime shutdown
    /// waits for it, so drop all handles before the runtime.
    pub fn init(mut evaluator: RangeMaxEvaluator) -> EvaluatorHandle {
        let (tx, mut rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);

        tokio::task::spawn_blocking(move || {
            while let Some(command) = rx.blocking_recv() {
                match command {
                    Command::Evaluate(cmd) => {
                        let result = evaluator.evaluate_query(&cmd.query);
                        if let Err(e) = &result {
                            debug!(query = %cmd.query, error = %e, "Query failed");
                        }
                        if cmd.responder.send(result).is_err() {
                            error!("Failed to send evaluation response");
                        }
                    }
                    Command::Stats(cmd) => {
                        if cmd.responder.send(evaluator.stats()).is_err() {
                            error!("Failed to send stats response");
                        }
                    }
                }
            }
            debug!(stats = %evaluator.stats(), "Evaluator job stopped");
        });

        EvaluatorHandle { tx }
    }
}

/// Cloneable sender side of an [`EvaluatorJob`].
#[derive(Clone)]
pub struct EvaluatorHandle {
    pub tx: mpsc::Sender<Command>,
}

impl EvaluatorHandle {
    /// Evaluate one query on the job's evaluator.
    ///
    /// # Errors
    ///
    /// - [`DriverError::Evaluation`] when the evaluator rejects or fails the query
    /// - [`DriverError::JobClosed`] when the job has stopped
    pub async fn evaluate(&self, query: RangeQuery) -> Result<u32, DriverError> {
        let (responder, rx) = oneshot::channel();
        self.tx
            .send(Command::Evaluate(EvaluateCommand { query, responder }))
            .await
            .map_err(|_| DriverError::JobClosed)?;
        let answer = rx.await.map_err(|_| DriverError::JobClosed)??;
        Ok(answer)
    }

    /// Snapshot of the job's evaluator statistics.
    pub async fn stats(&self) -> Result<EvaluatorStats, DriverError> {
        let (responder, rx) = oneshot::channel();
        self.tx
            .send(Command::Stats(StatsCommand { responder }))
            .await
            .map_err(|_| DriverError::JobClosed)?;
        rx.await.map_err(|_| DriverError::JobClosed)
    }
}

/// Commands for the [`EvaluatorJob`]
pub enum Command {
    Evaluate(EvaluateCommand),
    Stats(StatsCommand),
}

pub struct EvaluateCommand {
    pub query: RangeQuery,
    pub responder: Responder<Result<u32, EvaluationError>>,
}

pub struct StatsCommand {
    pub responder: Responder<EvaluatorStats>,
}
