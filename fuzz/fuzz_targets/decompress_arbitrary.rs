#![no_main]
use libfuzzer_sys::fuzz_target;

use brotli_stream::{BrotliError, Decompressor};

fuzz_target!(|input: &[u8]| {
    // First byte selects the output limit; 0 means unlimited.
    let (limit, data) = match input.split_first() {
        Some((&l, rest)) => ((l != 0).then_some(usize::from(l) * 64), rest),
        None => return,
    };

    let dec = Decompressor::new().unwrap();
    let mut total = 0usize;
    let mut result = dec.process(data, limit);
    while let Ok(out) = &result {
        if let Some(l) = limit {
            assert!(out.len() <= l);
        }
        total += out.len();
        if dec.can_accept_more_data().unwrap() || total > 64 << 20 {
            break;
        }
        result = dec.process(&[], limit);
    }

    match result {
        Ok(_) => {
            let _ = dec.finish();
        }
        Err(BrotliError::Codec(_)) => {
            // An errored decoder stays errored.
            assert!(matches!(dec.process(&[], None), Err(BrotliError::InvalidState(_))) || dec.is_finished().unwrap());
        }
        Err(e) => panic!("unexpected error kind: {e:?}"),
    }
});
