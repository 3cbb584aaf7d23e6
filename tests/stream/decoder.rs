// Integration tests for src/decoder.rs — Decompressor state machine
//
// Verifies:
//   - arbitrary input chunking decodes to the same bytes
//   - output_limit bounds each call and retains pending input
//   - can_accept_more_data tracks pending input and buffered output
//   - dictionary-primed decoders accept ordinary streams

use brotli_stream::corpus::words;
use brotli_stream::{compress_with, BrotliError, Decompressor, EncoderParams};

fn packed(size: usize, seed: u32) -> (Vec<u8>, Vec<u8>) {
    let data = words(size, seed);
    let p = compress_with(&data, &EncoderParams::default().with_quality(5)).unwrap();
    (data, p)
}

// ─────────────────────────────────────────────────────────────────────────────
// Chunking
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn uneven_chunks_decode_identically() {
    let (data, p) = packed(60_000, 1);
    for step in [1usize, 3, 64, 1000, p.len()] {
        let d = Decompressor::new().unwrap();
        let mut out = Vec::new();
        for chunk in p.chunks(step) {
            out.extend(d.decompress(chunk, None).unwrap());
        }
        assert!(d.is_finished().unwrap(), "step {step}");
        assert_eq!(out, data, "step {step}");
    }
}

#[test]
fn empty_chunks_are_harmless() {
    let (data, p) = packed(5_000, 2);
    let d = Decompressor::new().unwrap();
    let mut out = d.process(&[], None).unwrap();
    let (a, b) = p.split_at(p.len() / 2);
    out.extend(d.process(a, None).unwrap());
    out.extend(d.process(&[], None).unwrap());
    out.extend(d.process(b, None).unwrap());
    assert_eq!(out, data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Output limit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn limit_returns_exactly_limit_until_tail() {
    let (data, p) = packed(40_000, 3);
    let d = Decompressor::new().unwrap();
    let mut calls = vec![d.process(&p, Some(5_000)).unwrap()];
    while !d.can_accept_more_data().unwrap() {
        calls.push(d.process(&[], Some(5_000)).unwrap());
    }
    let (last, full) = calls.split_last().unwrap();
    assert!(full.iter().all(|c| c.len() == 5_000));
    assert!(last.len() <= 5_000);
    assert_eq!(calls.concat(), data);
}

#[test]
fn can_accept_more_data_on_fresh_decoder() {
    let d = Decompressor::new().unwrap();
    assert!(d.can_accept_more_data().unwrap());
    assert!(!d.is_finished().unwrap());
}

#[test]
fn new_data_while_pending_is_invalid_state() {
    let (_, p) = packed(80_000, 4);
    let d = Decompressor::new().unwrap();
    d.process(&p, Some(16)).unwrap();
    match d.process(&p, None) {
        Err(BrotliError::InvalidState(msg)) => assert!(msg.contains("can_accept_more_data")),
        other => panic!("expected InvalidState, got {other:?}"),
    }
}

#[test]
fn unlimited_call_drains_pending() {
    let (data, p) = packed(80_000, 5);
    let d = Decompressor::new().unwrap();
    let mut out = d.process(&p, Some(16)).unwrap();
    out.extend(d.process(&[], None).unwrap());
    assert!(d.can_accept_more_data().unwrap());
    assert!(d.is_finished().unwrap());
    assert_eq!(out, data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Dictionary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dictionary_decoder_reads_plain_stream() {
    let (data, p) = packed(10_000, 6);
    let d = Decompressor::with_dictionary(b"unrelated dictionary bytes").unwrap();
    assert_eq!(d.process(&p, None).unwrap(), data);
    assert!(d.is_finished().unwrap());
}
