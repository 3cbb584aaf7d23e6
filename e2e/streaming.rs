// e2e/streaming.rs — Incremental behaviour of the stream codecs.
//
// Covers:
//   - chunked compression decodes identically for any chunk size
//   - flush after every chunk keeps the stream decodable and unterminated
//   - drip-feed decompression one byte at a time
//   - output-limited decompression with can_accept_more_data() draining

use brotli_stream::corpus::words;
use brotli_stream::{compress_with, decompress, BrotliError, Compressor, Decompressor, EncoderParams};

fn params() -> EncoderParams {
    EncoderParams::default().with_quality(5)
}

fn compress_chunked(data: &[u8], chunk: usize, flush: bool) -> Vec<u8> {
    let c = Compressor::new(&params()).unwrap();
    let mut out = Vec::new();
    for piece in data.chunks(chunk) {
        out.extend(c.process(piece).unwrap());
        if flush {
            out.extend(c.flush().unwrap());
        }
    }
    out.extend(c.finish().unwrap());
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Chunked equivalence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn chunked_compression_decodes_for_every_chunk_size() {
    let data = words(40_000, 1);
    for chunk in [1usize, 7, 512, 4096, 39_999, 40_000, 1 << 20] {
        let packed = compress_chunked(&data, chunk, false);
        assert_eq!(decompress(&packed).unwrap(), data, "chunk size {chunk}");
    }
}

#[test]
fn compress_alias_matches_process() {
    let data = words(10_000, 2);
    let a = Compressor::new(&params()).unwrap();
    let b = Compressor::new(&params()).unwrap();
    let mut pa = a.process(&data).unwrap();
    pa.extend(a.finish().unwrap());
    let mut pb = b.compress(&data).unwrap();
    pb.extend(b.finish().unwrap());
    assert_eq!(pa, pb);
}

// ─────────────────────────────────────────────────────────────────────────────
// Flush
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn flushed_prefix_decodes_to_everything_fed_so_far() {
    let data = words(30_000, 3);
    let c = Compressor::new(&params()).unwrap();
    let d = Decompressor::new().unwrap();
    let mut fed = 0usize;
    let mut plain = Vec::new();

    for piece in data.chunks(4_000) {
        let mut packed = c.process(piece).unwrap();
        packed.extend(c.flush().unwrap());
        fed += piece.len();

        // Every byte fed so far is recoverable without finishing the stream.
        plain.extend(d.process(&packed, None).unwrap());
        assert_eq!(plain, &data[..fed]);
        assert!(!d.is_finished().unwrap());
        assert!(!c.is_finished().unwrap());
    }
    let tail = c.finish().unwrap();
    d.process(&tail, None).unwrap();
    assert!(d.is_finished().unwrap());
}

#[test]
fn flush_output_concatenation_roundtrips() {
    let data = words(50_000, 4);
    let packed = compress_chunked(&data, 1_000, true);
    assert_eq!(decompress(&packed).unwrap(), data);
}

#[test]
fn flush_makes_decoder_emit_all_prior_input() {
    let data = words(20_000, 5);
    let c = Compressor::new(&params()).unwrap();
    let d = Decompressor::new().unwrap();
    let mut packed = c.process(&data).unwrap();
    packed.extend(c.flush().unwrap());
    assert_eq!(d.process(&packed, None).unwrap(), data);
    assert!(!d.is_finished().unwrap());
    assert!(matches!(d.finish(), Err(BrotliError::IncompleteStream)));
}

#[test]
fn repeated_flush_is_harmless() {
    let c = Compressor::new(&params()).unwrap();
    let mut packed = c.process(b"abc").unwrap();
    for _ in 0..3 {
        packed.extend(c.flush().unwrap());
    }
    packed.extend(c.finish().unwrap());
    assert_eq!(decompress(&packed).unwrap(), b"abc");
}

// ─────────────────────────────────────────────────────────────────────────────
// Drip-feed
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn drip_feed_one_byte_at_a_time() {
    let data = words(16_000, 6);
    let packed = compress_with(&data, &params()).unwrap();
    let d = Decompressor::new().unwrap();
    let mut out = Vec::new();
    for (i, byte) in packed.iter().enumerate() {
        assert!(!d.is_finished().unwrap(), "finished early at byte {i}");
        out.extend(d.process(std::slice::from_ref(byte), None).unwrap());
    }
    assert!(d.is_finished().unwrap());
    d.finish().unwrap();
    assert_eq!(out, data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Output limit
// ─────────────────────────────────────────────────────────────────────────────

fn drain_with_limit(packed: &[u8], limit: usize) -> Vec<u8> {
    let d = Decompressor::new().unwrap();
    let mut out = d.process(packed, Some(limit)).unwrap();
    assert!(out.len() <= limit);
    while !d.can_accept_more_data().unwrap() {
        let piece = d.process(&[], Some(limit)).unwrap();
        assert!(piece.len() <= limit);
        out.extend(piece);
    }
    assert!(d.is_finished().unwrap());
    out
}

#[test]
fn output_limit_bounds_every_call() {
    let small = words(3_000, 7);
    let packed = compress_with(&small, &params()).unwrap();
    for limit in [1usize, 100] {
        assert_eq!(drain_with_limit(&packed, limit), small, "limit {limit}");
    }

    let large = words(200_000, 7);
    let packed = compress_with(&large, &params()).unwrap();
    for limit in [4096usize, 65_536, 1 << 20] {
        assert_eq!(drain_with_limit(&packed, limit), large, "limit {limit}");
    }
}

#[test]
fn pending_input_blocks_new_data() {
    let data = words(100_000, 8);
    let packed = compress_with(&data, &params()).unwrap();
    let d = Decompressor::new().unwrap();

    let first = d.process(&packed, Some(1_000)).unwrap();
    assert_eq!(first.len(), 1_000);
    assert!(!d.can_accept_more_data().unwrap());
    match d.process(b"more", Some(1_000)) {
        Err(BrotliError::InvalidState(_)) => {}
        other => panic!("expected InvalidState, got {other:?}"),
    }
    // The rejected call did not disturb the stream.
    let mut out = first;
    while !d.can_accept_more_data().unwrap() {
        out.extend(d.process(&[], Some(1_000)).unwrap());
    }
    assert_eq!(out, data);
}

#[test]
fn zero_limit_returns_nothing_and_keeps_state() {
    let data = words(50_000, 9);
    let packed = compress_with(&data, &params()).unwrap();
    let d = Decompressor::new().unwrap();
    let first = d.process(&packed, Some(10)).unwrap();
    assert!(d.process(&[], Some(0)).unwrap().is_empty());
    assert!(!d.can_accept_more_data().unwrap());
    let mut out = first;
    out.extend(d.process(&[], None).unwrap());
    assert_eq!(out, data);
    assert!(d.can_accept_more_data().unwrap());
}

#[test]
fn limited_drip_feed() {
    let data = words(30_000, 10);
    let packed = compress_with(&data, &params()).unwrap();
    let d = Decompressor::new().unwrap();
    let mut out = Vec::new();
    for chunk in packed.chunks(50) {
        out.extend(d.process(chunk, Some(777)).unwrap());
        while !d.can_accept_more_data().unwrap() {
            out.extend(d.process(&[], Some(777)).unwrap());
        }
    }
    assert!(d.is_finished().unwrap());
    assert_eq!(out, data);
}
