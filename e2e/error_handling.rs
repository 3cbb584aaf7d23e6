//! E2E: error handling and terminal states.
//!
//! Every failure must come back as a `BrotliError` variant, never a panic:
//! - invalid parameters are rejected before an encoder exists
//! - garbage and truncated input are codec / incomplete-stream errors
//! - finished encoders and errored decoders refuse further work
//! - finished decoders return empty output

use brotli_stream::corpus::words;
use brotli_stream::{
    compress, compress_with, decompress, BrotliError, Compressor, Decompressor, EncoderMode,
    EncoderParams,
};

fn expect_parameter(params: EncoderParams, needle: &str) {
    match Compressor::new(&params) {
        Err(BrotliError::Parameter(msg)) => {
            assert!(msg.contains(needle), "message {msg:?} should mention {needle:?}")
        }
        other => panic!("expected Parameter error for {params:?}, got {other:?}"),
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Parameter validation
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn quality_out_of_range() {
    expect_parameter(EncoderParams::default().with_quality(12), "quality");
    expect_parameter(EncoderParams::default().with_quality(u32::MAX), "quality");
}

#[test]
fn lgwin_out_of_range() {
    expect_parameter(EncoderParams::default().with_lgwin(9), "lgwin");
    expect_parameter(EncoderParams::default().with_lgwin(25), "lgwin");
}

#[test]
fn lgblock_out_of_range() {
    for bad in [1u32, 15, 25] {
        expect_parameter(EncoderParams::default().with_lgblock(bad), "lgblock");
    }
}

#[test]
fn raw_mode_out_of_range() {
    assert!(matches!(EncoderMode::try_from(3), Err(BrotliError::Parameter(_))));
    assert!(matches!(EncoderParams::from_raw(99, 11, 22, 0), Err(BrotliError::Parameter(_))));
}

#[test]
fn one_shot_rejects_bad_params() {
    let err = compress_with(b"x", &EncoderParams::default().with_lgwin(4)).unwrap_err();
    assert_eq!(err.to_string(), "4 is not a valid lgwin, must be between 10 and 24");
}

// ═════════════════════════════════════════════════════════════════════════════
// Garbage and truncation
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn one_shot_garbage_is_codec_error() {
    match decompress(b"some random garbage") {
        Err(BrotliError::Codec(msg)) => {
            assert!(msg.starts_with("Decompression error: "), "{msg}");
            // The codec's own diagnostic names the format violation.
            assert!(msg.contains("FORMAT_"), "{msg}");
            assert!(!msg.contains("BROTLI_DECODER_"), "{msg}");
        }
        other => panic!("expected Codec error, got {other:?}"),
    }
}

#[test]
fn streaming_garbage_is_codec_error_and_never_finishes() {
    let d = Decompressor::new().unwrap();
    assert!(matches!(d.process(b"some random garbage", None), Err(BrotliError::Codec(_))));
    assert!(!d.is_finished().unwrap());
    assert!(matches!(d.finish(), Err(BrotliError::IncompleteStream)));
    // Errored is terminal.
    assert!(matches!(d.process(&[], None), Err(BrotliError::InvalidState(_))));
}

#[test]
fn truncated_stream_is_incomplete() {
    let data = words(20_000, 1);
    let packed = compress(&data).unwrap();
    let d = Decompressor::new().unwrap();
    d.process(&packed[..packed.len() - 1], None).unwrap();
    assert!(!d.is_finished().unwrap());
    assert!(matches!(d.finish(), Err(BrotliError::IncompleteStream)));
}

#[test]
fn one_shot_rejects_trailing_bytes() {
    let mut packed = compress(b"payload payload payload").unwrap();
    packed.extend_from_slice(b"trailing");
    match decompress(&packed) {
        Err(BrotliError::Codec(msg)) => assert!(msg.contains("excess input")),
        other => panic!("expected Codec error, got {other:?}"),
    }
}

#[test]
fn streaming_keeps_output_before_trailing_bytes_at_any_split() {
    let data = words(1_500, 2);
    let mut input = compress(&data).unwrap();
    input.extend_from_slice(b"XYZ");

    for split in 0..=input.len() {
        let d = Decompressor::new().unwrap();
        let mut out = d.process(&input[..split], None).unwrap();
        out.extend(d.process(&input[split..], None).unwrap());
        assert_eq!(out, data, "split at {split}");
        assert!(d.is_finished().unwrap());
        assert!(d.finish().unwrap().is_empty());
    }
}

#[test]
fn empty_input_is_incomplete_one_shot() {
    assert!(matches!(decompress(&[]), Err(BrotliError::IncompleteStream)));
}

// ═════════════════════════════════════════════════════════════════════════════
// Terminal states
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn finished_encoder_refuses_everything() {
    let c = Compressor::new(&EncoderParams::default().with_quality(2)).unwrap();
    c.process(b"data").unwrap();
    c.finish().unwrap();
    assert!(c.is_finished().unwrap());
    for r in [c.process(b"more"), c.process(&[]), c.flush(), c.finish()] {
        assert!(matches!(r, Err(BrotliError::InvalidState(_))), "got {r:?}");
    }
    // Still finished after the rejected calls.
    assert!(c.is_finished().unwrap());
}

#[test]
fn finished_decoder_returns_empty() {
    let data = words(5_000, 2);
    let packed = compress(&data).unwrap();
    let d = Decompressor::new().unwrap();
    assert_eq!(d.process(&packed, None).unwrap(), data);
    assert!(d.is_finished().unwrap());
    assert!(d.process(&[], None).unwrap().is_empty());
    assert!(d.process(&[], Some(10)).unwrap().is_empty());
    assert!(d.is_finished().unwrap());
    assert!(d.finish().unwrap().is_empty());
    assert!(d.finish().unwrap().is_empty());
}

#[test]
fn decoder_flush_is_always_empty() {
    let d = Decompressor::new().unwrap();
    assert!(d.flush().unwrap().is_empty());
    d.process(&compress(b"x").unwrap(), None).unwrap();
    assert!(d.flush().unwrap().is_empty());
}
