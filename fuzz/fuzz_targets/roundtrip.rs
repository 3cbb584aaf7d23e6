#![no_main]
use libfuzzer_sys::fuzz_target;

use brotli_stream::{decompress, Compressor, EncoderParams};

fuzz_target!(|input: &[u8]| {
    // First byte picks quality, second the chunk size; the rest is payload.
    let (quality, chunk, data) = match input {
        [q, c, rest @ ..] => (u32::from(*q) % 12, usize::from(*c) + 1, rest),
        _ => return,
    };

    let params = EncoderParams::default().with_quality(quality);
    let enc = Compressor::new(&params).unwrap();
    let mut packed = Vec::new();
    for (i, piece) in data.chunks(chunk).enumerate() {
        packed.extend(enc.process(piece).unwrap());
        if i % 3 == 2 {
            packed.extend(enc.flush().unwrap());
        }
    }
    packed.extend(enc.finish().unwrap());

    let recovered = decompress(&packed).unwrap_or_else(|e| {
        panic!(
            "round-trip: self-compressed stream rejected ({} bytes in, {} bytes packed): {e}",
            data.len(),
            packed.len()
        )
    });
    assert_eq!(recovered, data);
});
