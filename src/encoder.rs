//! Incremental compressor.
//!
//! A [`Compressor`] accepts input in arbitrary chunks via
//! [`process`](Compressor::process), can be asked to [`flush`](Compressor::flush)
//! so that everything emitted so far is decodable, and is terminated with
//! [`finish`](Compressor::finish). After `finish` every mutating call fails with
//! [`BrotliError::InvalidState`].
//!
//! Each call drains the encoder completely before returning: the output
//! accumulator never carries bytes over to the next call.

use crate::error::{BrotliError, Result};
use crate::growth::{next_output_size, reserve_output};
use crate::guard::Exclusive;
use crate::native::{NativeEncoder, Operation};
use crate::params::EncoderParams;

// ─────────────────────────────────────────────────────────────────────────────
// Encoder core (unsynchronised)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct EncoderCore {
    native: NativeEncoder,
    finished: bool,
}

impl EncoderCore {
    pub(crate) fn new(params: &EncoderParams) -> Result<Self> {
        params.validate()?;
        let native = NativeEncoder::new(params)?;
        log::debug!(
            "encoder created: mode={} quality={} lgwin={} lgblock={}",
            params.mode,
            params.quality,
            params.lgwin,
            params.lgblock
        );
        Ok(EncoderCore { native, finished: false })
    }

    fn ensure_active(&self, what: &str) -> Result<()> {
        if self.finished {
            return Err(BrotliError::invalid_state(format!(
                "cannot {what}: compressor has already been finished"
            )));
        }
        Ok(())
    }

    /// Run `op` over `input` until the encoder has nothing more to say.
    ///
    /// `Process` and `Flush` stop once the input is consumed and the encoder
    /// holds no pending output; `Finish` stops once the stream is complete.
    pub(crate) fn drive(&mut self, op: Operation, input: &[u8]) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::new();
        let mut remaining = input;
        let mut iteration = 0usize;

        loop {
            let size = next_output_size(remaining.len(), out.len(), iteration, None);
            let mut buf = reserve_output(size)?;
            let step = self.native.compress_stream(op, remaining, &mut buf)?;
            remaining = &remaining[step.consumed..];
            log::trace!(
                "encode {:?} pass {}: buf={} consumed={} produced={}",
                op,
                iteration,
                size,
                step.consumed,
                step.produced
            );

            buf.truncate(step.produced);
            if out.is_empty() {
                out = buf;
            } else {
                out.try_reserve(buf.len())
                    .map_err(|e| BrotliError::Allocation(e.to_string()))?;
                out.extend_from_slice(&buf);
            }
            iteration += 1;

            let done = match op {
                Operation::Finish => self.native.is_finished(),
                Operation::Process | Operation::Flush => {
                    remaining.is_empty() && !self.native.has_more_output()
                }
            };
            if done {
                break;
            }
        }
        Ok(out)
    }

    pub(crate) fn process(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.ensure_active("process data")?;
        self.drive(Operation::Process, data)
    }

    pub(crate) fn flush(&mut self) -> Result<Vec<u8>> {
        self.ensure_active("flush")?;
        self.drive(Operation::Flush, &[])
    }

    /// Push `data` and terminate the stream in one drive.
    pub(crate) fn finish_with(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.ensure_active("finish")?;
        let out = self.drive(Operation::Finish, data)?;
        self.finished = true;
        log::debug!("encoder finished");
        Ok(out)
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compressor (public, guarded)
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming Brotli compressor.
///
/// Every method takes `&self` so an instance can be shared behind an `Arc`;
/// overlapping calls fail with [`BrotliError::ConcurrentAccess`] rather than
/// blocking.
#[derive(Debug)]
pub struct Compressor {
    core: Exclusive<EncoderCore>,
}

impl Compressor {
    /// Validate `params` and create the native encoder.
    pub fn new(params: &EncoderParams) -> Result<Self> {
        Ok(Compressor { core: Exclusive::new(EncoderCore::new(params)?) })
    }

    /// Compressor with [`EncoderParams::default`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(&EncoderParams::default())
    }

    /// Compress `data`, returning whatever output the encoder chose to emit.
    /// The result may be empty.
    pub fn process(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.core.with(|c| c.process(data))
    }

    /// Alias of [`process`](Self::process).
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.process(data)
    }

    /// Emit everything buffered so far as a decodable unit without ending the
    /// stream.
    pub fn flush(&self) -> Result<Vec<u8>> {
        self.core.with(|c| c.flush())
    }

    /// End the stream and return the trailing bytes.
    pub fn finish(&self) -> Result<Vec<u8>> {
        self.core.with(|c| c.finish_with(&[]))
    }

    pub fn is_finished(&self) -> Result<bool> {
        self.core.with(|c| Ok(c.is_finished()))
    }
}
