// brotli-stream — incremental Brotli compression with process/flush/finish streams

pub mod config;
pub mod error;
pub mod params;
pub mod growth;
pub mod guard;
pub mod native;
pub mod encoder;
pub mod decoder;
pub mod io;
pub mod corpus;
pub mod cli;

#[cfg(feature = "c-abi")]
pub mod abi;

// ── Version constants ────────────────────────────────────────────────────────
pub const VERSION_MAJOR: u32 = 1;
pub const VERSION_MINOR: u32 = 2;
pub const VERSION_RELEASE: u32 = 0;
pub const VERSION_NUMBER: u32 = VERSION_MAJOR * 100 * 100 + VERSION_MINOR * 100 + VERSION_RELEASE;
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

pub fn version_number() -> u32 {
    VERSION_NUMBER
}

pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ─────────────────────────────────────────────────────
pub use decoder::Decompressor;
pub use encoder::Compressor;
pub use error::{BrotliError, Result};
pub use params::{EncoderMode, EncoderParams, DEFAULT_MODE};

// ── One-shot helpers ─────────────────────────────────────────────────────────

/// Compress a complete buffer with default parameters.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(data, &EncoderParams::default())
}

/// Compress a complete buffer.
///
/// The whole input goes through a single finishing drive, so no intermediate
/// flush points are inserted.
pub fn compress_with(data: &[u8], params: &EncoderParams) -> Result<Vec<u8>> {
    let mut core = encoder::EncoderCore::new(params)?;
    core.finish_with(data)
}

/// Decompress a complete stream. Truncated input is an
/// [`IncompleteStream`](BrotliError::IncompleteStream) error; bytes after the
/// end of stream are a [`Codec`](BrotliError::Codec) error.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut core = decoder::DecoderCore::new(&[])?;
    let out = core.process(data, None)?;
    core.finish()?;
    let excess = core.ignored_input();
    if excess > 0 {
        return Err(BrotliError::Codec(format!(
            "Decompression error: {excess} bytes of excess input after end of stream"
        )));
    }
    Ok(out)
}
