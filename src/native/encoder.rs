//! Native encoder handle.

use alloc_stdlib::StandardAlloc;
use brotli::enc::encode::{
    BrotliEncoderCompressStream, BrotliEncoderCreateInstance, BrotliEncoderDestroyInstance,
    BrotliEncoderHasMoreOutput, BrotliEncoderIsFinished, BrotliEncoderOperation,
    BrotliEncoderParameter, BrotliEncoderSetParameter, BrotliEncoderStateStruct,
};

use crate::error::{BrotliError, Result};
use crate::params::EncoderParams;

const BROTLI_TRUE: i32 = 1;

/// One-shot directive for a single `compress_stream` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Process,
    Flush,
    Finish,
}

impl Operation {
    fn native(self) -> BrotliEncoderOperation {
        match self {
            Operation::Process => BrotliEncoderOperation::BROTLI_OPERATION_PROCESS,
            Operation::Flush => BrotliEncoderOperation::BROTLI_OPERATION_FLUSH,
            Operation::Finish => BrotliEncoderOperation::BROTLI_OPERATION_FINISH,
        }
    }
}

/// Progress made by one `compress_stream` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStep {
    pub consumed: usize,
    pub produced: usize,
}

pub struct NativeEncoder {
    state: BrotliEncoderStateStruct<StandardAlloc>,
}

impl NativeEncoder {
    /// Create the native state and apply `params`.
    ///
    /// `params` must already be validated; a rejection here means the codec
    /// disagrees with the validator.
    pub fn new(params: &EncoderParams) -> Result<Self> {
        let mut enc = NativeEncoder {
            state: BrotliEncoderCreateInstance(StandardAlloc::default()),
        };
        enc.set(BrotliEncoderParameter::BROTLI_PARAM_MODE, "mode", params.mode.as_u32())?;
        enc.set(BrotliEncoderParameter::BROTLI_PARAM_QUALITY, "quality", params.quality)?;
        enc.set(BrotliEncoderParameter::BROTLI_PARAM_LGWIN, "lgwin", params.lgwin)?;
        enc.set(BrotliEncoderParameter::BROTLI_PARAM_LGBLOCK, "lgblock", params.lgblock)?;
        Ok(enc)
    }

    fn set(&mut self, param: BrotliEncoderParameter, name: &str, value: u32) -> Result<()> {
        if BrotliEncoderSetParameter(&mut self.state, param, value) != BROTLI_TRUE {
            return Err(BrotliError::Parameter(format!("error setting parameter {name}: {value}")));
        }
        Ok(())
    }

    /// Feed `input` under `op`, writing into `output`.
    pub fn compress_stream(
        &mut self,
        op: Operation,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<EncodeStep> {
        let mut available_in = input.len();
        let mut in_offset = 0usize;
        let mut available_out = output.len();
        let mut out_offset = 0usize;
        let mut total_out: Option<usize> = None;

        let rc = BrotliEncoderCompressStream(
            &mut self.state,
            op.native(),
            &mut available_in,
            input,
            &mut in_offset,
            &mut available_out,
            output,
            &mut out_offset,
            &mut total_out,
            &mut |_, _, _, _| (),
        );
        if rc != BROTLI_TRUE {
            return Err(BrotliError::Codec("Error encountered compressing data.".into()));
        }
        Ok(EncodeStep {
            consumed: input.len() - available_in,
            produced: output.len() - available_out,
        })
    }

    pub fn is_finished(&self) -> bool {
        BrotliEncoderIsFinished(&self.state) == BROTLI_TRUE
    }

    pub fn has_more_output(&self) -> bool {
        BrotliEncoderHasMoreOutput(&self.state) == BROTLI_TRUE
    }
}

impl Drop for NativeEncoder {
    fn drop(&mut self) {
        BrotliEncoderDestroyInstance(&mut self.state);
    }
}

impl std::fmt::Debug for NativeEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeEncoder")
            .field("finished", &self.is_finished())
            .field("has_more_output", &self.has_more_output())
            .finish()
    }
}
