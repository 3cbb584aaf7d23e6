//! Native decoder handle.

use alloc_no_stdlib::{Allocator, SliceWrapperMut};
use alloc_stdlib::StandardAlloc;
use brotli_decompressor::{
    BrotliDecoderHasMoreOutput, BrotliDecompressStream, BrotliResult, BrotliState,
};

use crate::error::Result;
use crate::growth::reserve_output;

type DecoderState = BrotliState<StandardAlloc, StandardAlloc, StandardAlloc>;

/// Outcome of one `decompress_stream` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The end of the compressed stream was reached.
    Success,
    /// All input was consumed; the stream is not complete yet.
    NeedsMoreInput,
    /// The output buffer filled up; the decoder holds more output.
    NeedsMoreOutput,
    /// The input is not a valid stream. Carries the codec's diagnostic.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeStep {
    pub status: DecodeStatus,
    pub consumed: usize,
    pub produced: usize,
}

pub struct NativeDecoder {
    state: DecoderState,
    total_in: usize,
}

impl NativeDecoder {
    /// Create the decoder state. A non-empty `dictionary` is copied into
    /// memory owned by the state and lives exactly as long as it does.
    pub fn new(dictionary: &[u8]) -> Result<Self> {
        let state = if dictionary.is_empty() {
            BrotliState::new(StandardAlloc::default(), StandardAlloc::default(), StandardAlloc::default())
        } else {
            // Surface an Allocation error up front instead of aborting inside the allocator.
            drop(reserve_output(dictionary.len())?);
            let mut alloc_u8 = StandardAlloc::default();
            let mut dict = <StandardAlloc as Allocator<u8>>::alloc_cell(&mut alloc_u8, dictionary.len());
            dict.slice_mut().copy_from_slice(dictionary);
            BrotliState::new_with_custom_dictionary(
                alloc_u8,
                StandardAlloc::default(),
                StandardAlloc::default(),
                dict,
            )
        };
        Ok(NativeDecoder { state, total_in: 0 })
    }

    pub fn decompress_stream(&mut self, input: &[u8], output: &mut [u8]) -> DecodeStep {
        let mut available_in = input.len();
        let mut in_offset = 0usize;
        let mut available_out = output.len();
        let mut out_offset = 0usize;
        let mut total_out = 0usize;

        let result = BrotliDecompressStream(
            &mut available_in,
            &mut in_offset,
            input,
            &mut available_out,
            &mut out_offset,
            output,
            &mut total_out,
            &mut self.state,
        );

        let consumed = input.len() - available_in;
        let produced = output.len() - available_out;
        let offset = self.total_in + consumed;
        self.total_in = offset;

        let status = match result {
            BrotliResult::ResultSuccess => DecodeStatus::Success,
            BrotliResult::NeedsMoreInput => DecodeStatus::NeedsMoreInput,
            BrotliResult::NeedsMoreOutput => DecodeStatus::NeedsMoreOutput,
            BrotliResult::ResultFailure => {
                // e.g. BROTLI_DECODER_ERROR_FORMAT_PADDING_1
                let code = format!("{:?}", self.state.error_code);
                DecodeStatus::Error(format!(
                    "Decompression error: {} (near compressed byte {offset})",
                    code.trim_start_matches("BROTLI_DECODER_")
                ))
            }
        };

        DecodeStep { status, consumed, produced }
    }

    /// True while decoded bytes are buffered waiting for output space.
    pub fn has_more_output(&self) -> bool {
        BrotliDecoderHasMoreOutput(&self.state)
    }

    /// Compressed bytes consumed over the life of this decoder.
    pub fn total_in(&self) -> usize {
        self.total_in
    }
}

impl std::fmt::Debug for NativeDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeDecoder")
            .field("has_more_output", &self.has_more_output())
            .field("total_in", &self.total_in)
            .finish()
    }
}
