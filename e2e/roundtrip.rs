// e2e/roundtrip.rs — Round-trip across the encoder parameter space.
//
// Every combination of mode, quality, lgwin and lgblock must produce a stream
// that decodes back to the input, both through the one-shot helpers and
// through the incremental Compressor / Decompressor pair.

use brotli_stream::corpus::{noise, words};
use brotli_stream::{compress_with, decompress, Compressor, Decompressor, EncoderMode, EncoderParams};

const QUALITIES: [u32; 5] = [0, 1, 5, 9, 11];
const LGWINS: [u32; 4] = [10, 16, 22, 24];
const LGBLOCKS: [u32; 3] = [0, 16, 24];

fn sample() -> Vec<u8> {
    let mut data = words(12 * 1024, 17);
    data.extend(noise(1024, 17));
    data.extend(words(4 * 1024, 18));
    data
}

// ── One-shot ─────────────────────────────────────────────────────────────────

#[test]
fn one_shot_roundtrip_parameter_grid() {
    let data = sample();
    for mode in EncoderMode::ALL {
        for quality in QUALITIES {
            for lgwin in LGWINS {
                for lgblock in LGBLOCKS {
                    let params = EncoderParams { mode, quality, lgwin, lgblock };
                    let packed = compress_with(&data, &params)
                        .unwrap_or_else(|e| panic!("compress {params:?}: {e}"));
                    let plain = decompress(&packed)
                        .unwrap_or_else(|e| panic!("decompress {params:?}: {e}"));
                    assert_eq!(plain, data, "mismatch for {params:?}");
                }
            }
        }
    }
}

// ── Incremental ──────────────────────────────────────────────────────────────

#[test]
fn incremental_roundtrip_per_mode() {
    let data = sample();
    for mode in EncoderMode::ALL {
        let params = EncoderParams::default().with_mode(mode).with_quality(6);
        let c = Compressor::new(&params).unwrap();
        let mut packed = c.process(&data).unwrap();
        packed.extend(c.finish().unwrap());
        assert!(c.is_finished().unwrap());

        let d = Decompressor::new().unwrap();
        let plain = d.process(&packed, None).unwrap();
        assert!(d.is_finished().unwrap());
        assert!(d.finish().unwrap().is_empty());
        assert_eq!(plain, data, "mode {mode}");
    }
}

#[test]
fn empty_input_roundtrips() {
    let c = Compressor::new(&EncoderParams::default()).unwrap();
    let mut packed = c.process(&[]).unwrap();
    packed.extend(c.finish().unwrap());
    assert!(!packed.is_empty());
    assert!(decompress(&packed).unwrap().is_empty());
}

#[test]
fn large_compressible_input_roundtrips() {
    // Exercises several drain passes of the growth policy.
    let data = words(3 << 20, 99);
    let params = EncoderParams::default().with_quality(3);
    let packed = compress_with(&data, &params).unwrap();
    assert!(packed.len() < data.len() / 2);
    assert_eq!(decompress(&packed).unwrap(), data);
}

#[test]
fn one_shot_matches_incremental_decode() {
    let data = words(64 * 1024, 5);
    let packed = compress_with(&data, &EncoderParams::default().with_quality(9)).unwrap();
    let d = Decompressor::new().unwrap();
    let mut out = Vec::new();
    for chunk in packed.chunks(333) {
        out.extend(d.process(chunk, None).unwrap());
    }
    assert!(d.is_finished().unwrap());
    assert_eq!(out, data);
}
