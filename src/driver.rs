// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented read/eval/print loop.
//!
//! Each input line holds two whitespace-separated integers `lo hi`. Each
//! answer is written as `lo hi max_cycle_length`, echoing the bounds in the
//! order they were read, one line per query and in input order.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, Instrument};

use crate::command::EvaluatorHandle;
use crate::errors::{DriverError, EvaluationError};
use crate::spans;
use crate::types::query::RangeQuery;

/// Parse one input line.
///
/// Returns `Ok(None)` for blank lines. Tokens after the first two are ignored.
///
/// # Errors
///
/// - [`DriverError::Parse`] when fewer than two tokens are present or a token is not an integer
/// - [`DriverError::Evaluation`] when either bound is zero or negative
///
/// # Examples
///
/// ```
/// use collatzscan::read_query;
///
/// let query = read_query("10 1\n").unwrap().unwrap();
/// assert_eq!((query.lo(), query.hi()), (10, 1));
/// assert!(read_query("   ").unwrap().is_none());
/// assert!(read_query("10").is_err());
/// ```
pub fn read_query(line: &str) -> Result<Option<RangeQuery>, DriverError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    let second = tokens
        .next()
        .ok_or_else(|| DriverError::parse(line.trim_end(), "expected two integers"))?;

    let lo = parse_bound(line, first)?;
    let hi = parse_bound(line, second)?;
    let query = RangeQuery::new(lo, hi).map_err(EvaluationError::from)?;
    Ok(Some(query))
}

fn parse_bound(line: &str, token: &str) -> Result<i64, DriverError> {
    token
        .parse::<i64>()
        .map_err(|e| DriverError::parse(line.trim_end(), format!("{token:?}: {e}")))
}

/// Format one answer line, including the trailing newline.
///
/// ```
/// use collatzscan::{format_answer, RangeQuery};
///
/// let query = RangeQuery::new(10, 1).unwrap();
/// assert_eq!(format_answer(&query, 20), "10 1 20\n");
/// ```
pub fn format_answer(query: &RangeQuery, answer: u32) -> String {
    format!("{query} {answer}\n")
}

/// Read queries until end of input, answer each through `handle`, and write the answers.
///
/// Stops at the first malformed line or failed query; answers already written
/// stay written. Output is flushed before returning.
///
/// # Returns
///
/// The number of queries answered.
pub async fn solve<R, W>(
    reader: R,
    writer: &mut W,
    handle: &EvaluatorHandle,
) -> Result<u64, DriverError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async {
        let mut lines = reader.lines();
        let mut answered = 0u64;

        while let Some(line) = lines.next_line().await? {
            let Some(query) = read_query(&line)? else {
                continue;
            };
            let answer = handle.evaluate(query).await?;
            writer
                .write_all(format_answer(&query, answer).as_bytes())
                .await?;
            answered += 1;
            debug!(query = %query, answer = answer, "Answered query");
        }

        writer.flush().await?;
        info!(answered = answered, "Input exhausted");
        Ok::<_, DriverError>(answered)
    }
    .instrument(spans::solve())
    .await
}
