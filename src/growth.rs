//! Output-buffer sizing for the encoder and decoder drain loops.
//!
//! Each pass of a drain loop asks [`next_output_size`] how many bytes to
//! reserve, then reserves them with [`reserve_output`]. With an output limit
//! the answer is whatever room is left under the limit; without one it is a
//! multiple of the input length, or a doubling schedule when there is no input
//! left to size against.

use crate::config::{EMPTY_INPUT_BASE_SHIFT, EMPTY_INPUT_MAX_SHIFT, INPUT_EXPANSION_FACTOR};
use crate::error::{BrotliError, Result};

/// Size of the next output buffer.
///
/// * `input_len` — length of the input handed to this call.
/// * `emitted` — bytes already produced during this call.
/// * `iteration` — number of passes already completed during this call.
/// * `output_limit` — caller-imposed cap on bytes produced by this call.
///
/// A return value of `0` only happens under a limit and means "stop".
pub fn next_output_size(
    input_len: usize,
    emitted: usize,
    iteration: usize,
    output_limit: Option<usize>,
) -> usize {
    if let Some(limit) = output_limit {
        return limit.saturating_sub(emitted);
    }
    if input_len == 0 {
        let shift = (iteration as u64)
            .saturating_add(EMPTY_INPUT_BASE_SHIFT as u64)
            .min(EMPTY_INPUT_MAX_SHIFT as u64);
        return 1usize << shift;
    }
    input_len.saturating_mul(INPUT_EXPANSION_FACTOR)
}

/// Reserve a zeroed buffer of `size` bytes without aborting on failure.
pub fn reserve_output(size: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|e| BrotliError::Allocation(format!("{size} bytes: {e}")))?;
    buf.resize(size, 0);
    Ok(buf)
}
