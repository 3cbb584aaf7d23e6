//! Incremental decompressor with output-limited draining.
//!
//! A [`Decompressor`] takes compressed bytes in any chunking. When a call is
//! given an `output_limit`, it stops once that many bytes were produced and
//! keeps the unconsumed input as *pending*; the caller then keeps calling with
//! empty input until [`can_accept_more_data`](Decompressor::can_accept_more_data)
//! turns true again.
//!
//! States:
//!
//! | State      | Entered when                       | `process` returns |
//! |------------|------------------------------------|-------------------|
//! | `Active`   | construction                       | decoded bytes     |
//! | `Finished` | the codec reports end of stream    | empty             |
//! | `Errored`  | the codec rejects the input        | `InvalidState`    |
//!
//! Bytes that follow the end of stream, whether in the same call or a later
//! one, are dropped without being decoded.

use crate::error::{BrotliError, Result};
use crate::growth::{next_output_size, reserve_output};
use crate::guard::Exclusive;
use crate::native::{DecodeStatus, NativeDecoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    Active,
    Finished,
    Errored,
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoder core (unsynchronised)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct DecoderCore {
    native: NativeDecoder,
    pending: Vec<u8>,
    state: DecoderState,
    /// Bytes received after the end of stream; never decoded.
    ignored: usize,
}

impl DecoderCore {
    pub(crate) fn new(dictionary: &[u8]) -> Result<Self> {
        let native = NativeDecoder::new(dictionary)?;
        log::debug!("decoder created: dictionary={} bytes", dictionary.len());
        Ok(DecoderCore {
            native,
            pending: Vec::new(),
            state: DecoderState::Active,
            ignored: 0,
        })
    }

    fn note_ignored(&mut self, n: usize) {
        if n > 0 {
            self.ignored += n;
            log::debug!("ignoring {n} bytes after end of stream ({} total)", self.ignored);
        }
    }

    pub(crate) fn process(&mut self, data: &[u8], output_limit: Option<usize>) -> Result<Vec<u8>> {
        if !self.pending.is_empty() && !data.is_empty() {
            return Err(BrotliError::invalid_state(
                "brotli: decoder process called with data when 'can_accept_more_data()' is False",
            ));
        }
        if self.state == DecoderState::Finished {
            self.note_ignored(data.len());
            return Ok(Vec::new());
        }
        if output_limit == Some(0) {
            return Ok(Vec::new());
        }
        if self.state == DecoderState::Errored {
            return Err(BrotliError::invalid_state(
                "decompressor is unusable after a decompression error",
            ));
        }

        let taken = std::mem::take(&mut self.pending);
        let input: &[u8] = if taken.is_empty() { data } else { &taken };
        let input_len = input.len();

        let mut out: Vec<u8> = Vec::new();
        let mut cursor = 0usize;
        let mut iteration = 0usize;

        loop {
            let size = next_output_size(input_len, out.len(), iteration, output_limit);
            let mut buf = reserve_output(size)?;
            let step = self.native.decompress_stream(&input[cursor..], &mut buf);
            cursor += step.consumed;
            log::trace!(
                "decode pass {}: buf={} consumed={} produced={} status={:?}",
                iteration,
                size,
                step.consumed,
                step.produced,
                step.status
            );

            let status = match step.status {
                DecodeStatus::Error(detail) => {
                    self.state = DecoderState::Errored;
                    log::warn!("decoder entered errored state: {detail}");
                    return Err(BrotliError::Codec(detail));
                }
                status => status,
            };

            buf.truncate(step.produced);
            out.try_reserve(buf.len())
                .map_err(|e| BrotliError::Allocation(e.to_string()))?;
            out.extend_from_slice(&buf);
            iteration += 1;

            match status {
                DecodeStatus::Success => {
                    self.state = DecoderState::Finished;
                    log::debug!(
                        "decoder reached end of stream after {} compressed bytes",
                        self.native.total_in()
                    );
                    self.note_ignored(input_len - cursor);
                    break;
                }
                DecodeStatus::NeedsMoreOutput
                    if !output_limit.is_some_and(|limit| out.len() >= limit) =>
                {
                    continue
                }
                _ => {
                    // Output limit reached, or the codec wants more input.
                    self.pending = input[cursor..].to_vec();
                    break;
                }
            }
        }
        Ok(out)
    }

    pub(crate) fn finish(&self) -> Result<Vec<u8>> {
        if self.state != DecoderState::Finished {
            return Err(BrotliError::IncompleteStream);
        }
        Ok(Vec::new())
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.state == DecoderState::Finished
    }

    pub(crate) fn ignored_input(&self) -> usize {
        self.ignored
    }

    pub(crate) fn can_accept_more_data(&self) -> bool {
        self.pending.is_empty() && !self.native.has_more_output()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decompressor (public, guarded)
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming Brotli decompressor.
///
/// Every method takes `&self`; overlapping calls on a shared instance fail
/// with [`BrotliError::ConcurrentAccess`].
#[derive(Debug)]
pub struct Decompressor {
    core: Exclusive<DecoderCore>,
}

impl Decompressor {
    pub fn new() -> Result<Self> {
        Self::with_dictionary(&[])
    }

    /// Decoder primed with a raw dictionary; the stream must have been
    /// produced against the same dictionary.
    pub fn with_dictionary(dictionary: &[u8]) -> Result<Self> {
        Ok(Decompressor { core: Exclusive::new(DecoderCore::new(dictionary)?) })
    }

    /// Decode `data`, producing at most `output_limit` bytes when a limit is
    /// given.
    ///
    /// When the limit is hit, the unconsumed input is retained and further
    /// calls must pass empty `data` until
    /// [`can_accept_more_data`](Self::can_accept_more_data) returns true.
    pub fn process(&self, data: &[u8], output_limit: Option<usize>) -> Result<Vec<u8>> {
        self.core.with(|c| c.process(data, output_limit))
    }

    /// Alias of [`process`](Self::process).
    pub fn decompress(&self, data: &[u8], output_limit: Option<usize>) -> Result<Vec<u8>> {
        self.process(data, output_limit)
    }

    /// No-op kept for API symmetry with [`Compressor`](crate::Compressor).
    pub fn flush(&self) -> Result<Vec<u8>> {
        self.core.with(|_| Ok(Vec::new()))
    }

    /// Fails with [`BrotliError::IncompleteStream`] unless the end of the
    /// compressed stream has been seen.
    pub fn finish(&self) -> Result<Vec<u8>> {
        self.core.with(|c| c.finish())
    }

    pub fn is_finished(&self) -> Result<bool> {
        self.core.with(|c| Ok(c.is_finished()))
    }

    pub fn can_accept_more_data(&self) -> Result<bool> {
        self.core.with(|c| Ok(c.can_accept_more_data()))
    }
}
