// Integration tests for src/growth.rs — output-buffer sizing
//
// Verifies:
//   - limited passes are sized to the remaining room and stop at zero
//   - empty-input passes double from 32 KiB and cap at 16 MiB
//   - passes with input reserve five bytes per input byte, without growth
//   - reservation failures surface as Allocation errors

use brotli_stream::growth::{next_output_size, reserve_output};
use brotli_stream::BrotliError;

// ─────────────────────────────────────────────────────────────────────────────
// next_output_size
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn limit_takes_precedence_over_input() {
    assert_eq!(next_output_size(1 << 20, 0, 0, Some(64)), 64);
    assert_eq!(next_output_size(0, 0, 12, Some(64)), 64);
}

#[test]
fn limit_counts_down_and_stops() {
    let limit = 1000;
    let mut emitted = 0;
    let mut passes = 0;
    loop {
        let size = next_output_size(10, emitted, passes, Some(limit));
        if size == 0 {
            break;
        }
        emitted += size.min(300);
        passes += 1;
    }
    assert_eq!(emitted, limit);
    assert_eq!(passes, 4);
}

#[test]
fn empty_input_schedule() {
    let sizes: Vec<usize> = (0..12).map(|i| next_output_size(0, 0, i, None)).collect();
    assert_eq!(sizes[0], 1 << 15);
    for w in sizes.windows(2) {
        assert!(w[1] == w[0] * 2 || w[1] == 1 << 24);
    }
    assert_eq!(*sizes.last().unwrap(), 1 << 24);
}

#[test]
fn input_sizing_is_flat() {
    for iteration in 0..5 {
        assert_eq!(next_output_size(4096, iteration * 100, iteration, None), 20_480);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// reserve_output
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn reserve_returns_requested_len() {
    assert_eq!(reserve_output(0).unwrap().len(), 0);
    assert_eq!(reserve_output(32 * 1024).unwrap().len(), 32 * 1024);
}

#[test]
fn reserve_overflow_is_allocation_error() {
    let size = next_output_size(usize::MAX / 4, 0, 0, None);
    assert!(matches!(reserve_output(size), Err(BrotliError::Allocation(_))));
}
