// Integration tests for src/encoder.rs — Compressor state machine
//
// Verifies:
//   - process / compress return only what the encoder chose to emit
//   - flush output decodes to everything fed so far
//   - finish is terminal and idempotently rejected afterwards
//   - the same input and parameters produce the same bytes

use brotli_stream::corpus::{noise, words};
use brotli_stream::{decompress, BrotliError, Compressor, Decompressor, EncoderMode, EncoderParams};

fn compressor(quality: u32) -> Compressor {
    Compressor::new(&EncoderParams::default().with_quality(quality)).unwrap()
}

fn complete(c: &Compressor, data: &[u8]) -> Vec<u8> {
    let mut out = c.process(data).unwrap();
    out.extend(c.finish().unwrap());
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Output shape
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compressible_input_shrinks() {
    let data = words(100_000, 1);
    let packed = complete(&compressor(9), &data);
    assert!(packed.len() * 3 < data.len(), "{} -> {}", data.len(), packed.len());
}

#[test]
fn noise_roundtrips_despite_expansion() {
    let data = noise(50_000, 2);
    let packed = complete(&compressor(5), &data);
    assert_eq!(decompress(&packed).unwrap(), data);
}

#[test]
fn output_is_deterministic() {
    let data = words(30_000, 3);
    for mode in EncoderMode::ALL {
        let p = EncoderParams::default().with_mode(mode).with_quality(7);
        let a = complete(&Compressor::new(&p).unwrap(), &data);
        let b = complete(&Compressor::new(&p).unwrap(), &data);
        assert_eq!(a, b, "mode {mode}");
    }
}

#[test]
fn flush_output_is_deterministic() {
    let data = words(12_000, 4);
    let run = || {
        let c = compressor(6);
        let mut out = Vec::new();
        for piece in data.chunks(1_500) {
            out.extend(c.process(piece).unwrap());
            out.extend(c.flush().unwrap());
        }
        out.extend(c.finish().unwrap());
        out
    };
    assert_eq!(run(), run());
}

// ─────────────────────────────────────────────────────────────────────────────
// Flush
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn flush_on_fresh_encoder_is_decodable() {
    let c = compressor(5);
    let flushed = c.flush().unwrap();
    let d = Decompressor::new().unwrap();
    assert!(d.process(&flushed, None).unwrap().is_empty());
    assert!(!d.is_finished().unwrap());
    d.process(&c.finish().unwrap(), None).unwrap();
    assert!(d.is_finished().unwrap());
}

#[test]
fn flush_then_more_input_keeps_stream_alive() {
    let c = compressor(5);
    let mut packed = c.process(b"first half ").unwrap();
    packed.extend(c.flush().unwrap());
    packed.extend(c.process(b"second half").unwrap());
    packed.extend(c.finish().unwrap());
    assert_eq!(decompress(&packed).unwrap(), b"first half second half");
}

// ─────────────────────────────────────────────────────────────────────────────
// Terminal state
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn finish_without_input_yields_valid_empty_stream() {
    let c = compressor(11);
    let packed = c.finish().unwrap();
    assert!(c.is_finished().unwrap());
    assert!(decompress(&packed).unwrap().is_empty());
}

#[test]
fn calls_after_finish_are_invalid_state() {
    let c = compressor(1);
    c.finish().unwrap();
    match c.compress(b"late") {
        Err(BrotliError::InvalidState(msg)) => assert!(msg.contains("finished")),
        other => panic!("expected InvalidState, got {other:?}"),
    }
    assert!(matches!(c.flush(), Err(BrotliError::InvalidState(_))));
    assert!(matches!(c.finish(), Err(BrotliError::InvalidState(_))));
}

#[test]
fn fresh_encoder_is_not_finished() {
    assert!(!compressor(3).is_finished().unwrap());
}
