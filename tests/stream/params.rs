// Integration tests for src/params.rs — encoder parameter validation
//
// Verifies the accepted ranges at their edges and the wording of the
// rejection messages.

use brotli_stream::params::{validate_lgblock, validate_lgwin, validate_quality};
use brotli_stream::{BrotliError, Compressor, EncoderMode, EncoderParams, DEFAULT_MODE};

#[test]
fn every_valid_combination_builds_an_encoder() {
    for quality in [0u32, 11] {
        for lgwin in [10u32, 24] {
            for lgblock in [0u32, 16, 24] {
                let p = EncoderParams { mode: DEFAULT_MODE, quality, lgwin, lgblock };
                assert!(Compressor::new(&p).is_ok(), "{p:?}");
            }
        }
    }
}

#[test]
fn full_valid_ranges() {
    assert!((0..=11).all(|q| validate_quality(q).is_ok()));
    assert!((10..=24).all(|w| validate_lgwin(w).is_ok()));
    assert!((16..=24).all(|b| validate_lgblock(b).is_ok()));
    assert!((1..16).all(|b| validate_lgblock(b).is_err()));
}

#[test]
fn messages_name_value_and_range() {
    let msg = |r: brotli_stream::Result<u32>| match r {
        Err(BrotliError::Parameter(m)) => m,
        other => panic!("expected Parameter error, got {other:?}"),
    };
    assert_eq!(msg(validate_quality(20)), "20 is not a valid quality, must be between 0 and 11");
    assert_eq!(msg(validate_lgwin(30)), "30 is not a valid lgwin, must be between 10 and 24");
    assert_eq!(
        msg(validate_lgblock(8)),
        "8 is not a valid lgblock, must be either 0 or between 16 and 24"
    );
}

#[test]
fn default_mode_is_generic() {
    assert_eq!(DEFAULT_MODE, EncoderMode::Generic);
    assert_eq!(EncoderMode::default(), EncoderMode::Generic);
    assert_eq!(EncoderMode::Font.as_u32(), 2);
    assert_eq!(EncoderMode::Text.to_string(), "text");
}
