// Property tests for the stream codecs
//
// For arbitrary payloads, chunkings and output limits:
//   - compress -> decompress is the identity
//   - how the compressed bytes are split across decoder calls does not
//     change the decoded bytes
//   - a flush point makes everything fed so far decodable
//   - no limited decoder call returns more than its limit

use proptest::prelude::*;

use brotli_stream::{decompress, Compressor, Decompressor, EncoderMode, EncoderParams};

fn params_strategy() -> impl Strategy<Value = EncoderParams> {
    (
        prop::sample::select(EncoderMode::ALL.to_vec()),
        0u32..=11,
        10u32..=24,
        prop_oneof![Just(0u32), 16u32..=24],
    )
        .prop_map(|(mode, quality, lgwin, lgblock)| EncoderParams { mode, quality, lgwin, lgblock })
}

/// Payloads that mix runs with arbitrary bytes so both literal and copy
/// paths get exercised.
fn payload() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            prop::collection::vec(any::<u8>(), 0..64),
            (any::<u8>(), 1usize..300).prop_map(|(b, n)| vec![b; n]),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn split_points(len: usize, cuts: &[usize]) -> Vec<usize> {
    let mut points: Vec<usize> = cuts.iter().map(|c| if len == 0 { 0 } else { c % (len + 1) }).collect();
    points.push(0);
    points.push(len);
    points.sort_unstable();
    points.dedup();
    points
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_any_params(data in payload(), params in params_strategy()) {
        let c = Compressor::new(&params).unwrap();
        let mut packed = c.process(&data).unwrap();
        packed.extend(c.finish().unwrap());
        prop_assert_eq!(decompress(&packed).unwrap(), data);
    }

    #[test]
    fn decoder_chunking_is_irrelevant(
        data in payload(),
        cuts in prop::collection::vec(any::<usize>(), 0..8),
    ) {
        let packed = brotli_stream::compress_with(&data, &EncoderParams::default().with_quality(4)).unwrap();
        let points = split_points(packed.len(), &cuts);
        let d = Decompressor::new().unwrap();
        let mut out = Vec::new();
        for w in points.windows(2) {
            out.extend(d.process(&packed[w[0]..w[1]], None).unwrap());
        }
        prop_assert!(d.is_finished().unwrap());
        prop_assert_eq!(out, data);
    }

    #[test]
    fn flush_exposes_every_fed_byte(
        data in payload(),
        cuts in prop::collection::vec(any::<usize>(), 1..6),
    ) {
        let c = Compressor::new(&EncoderParams::default().with_quality(3)).unwrap();
        let d = Decompressor::new().unwrap();
        let points = split_points(data.len(), &cuts);
        let mut decoded = Vec::new();
        for w in points.windows(2) {
            let mut packed = c.process(&data[w[0]..w[1]]).unwrap();
            packed.extend(c.flush().unwrap());
            decoded.extend(d.process(&packed, None).unwrap());
            prop_assert_eq!(&decoded[..], &data[..w[1]]);
        }
        d.process(&c.finish().unwrap(), None).unwrap();
        prop_assert!(d.is_finished().unwrap());
    }

    #[test]
    fn limited_calls_respect_limit(data in payload(), limit in 1usize..5_000) {
        let packed = brotli_stream::compress(&data).unwrap();
        let d = Decompressor::new().unwrap();
        let mut out = d.process(&packed, Some(limit)).unwrap();
        prop_assert!(out.len() <= limit);
        while !d.can_accept_more_data().unwrap() {
            let part = d.process(&[], Some(limit)).unwrap();
            prop_assert!(part.len() <= limit);
            out.extend(part);
        }
        prop_assert!(d.is_finished().unwrap());
        prop_assert_eq!(out, data);
    }
}
