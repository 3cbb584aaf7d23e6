//! Owning wrappers around the codec's stream state.
//!
//! This is the only module that talks to the `brotli` / `brotli-decompressor`
//! stream functions. Everything above it sees:
//!
//! | Type              | Role |
//! |-------------------|------|
//! | [`NativeEncoder`] | Encoder state plus `compress_stream`, `is_finished`, `has_more_output`. |
//! | [`NativeDecoder`] | Decoder state plus `decompress_stream` returning a [`DecodeStatus`]. |
//!
//! Both release their state exactly once when dropped, including when
//! construction fails after the state was created.

pub mod decoder;
pub mod encoder;

pub use decoder::{DecodeStatus, DecodeStep, NativeDecoder};
pub use encoder::{EncodeStep, NativeEncoder, Operation};
