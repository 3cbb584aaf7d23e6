// Integration tests for src/abi.rs — extern "C" handle API
//
// Only built with `--features c-abi`. Calls the exported functions directly
// through their Rust signatures, the same way a C caller would link them.
#![cfg(feature = "c-abi")]

use std::ffi::CStr;
use std::os::raw::c_int;
use std::ptr;
use std::slice;

use brotli_stream::abi::*;
use brotli_stream::corpus::words;
use brotli_stream::{decompress, Compressor, Decompressor, VERSION_NUMBER};

fn empty_buf() -> BrotliStreamBuffer {
    BrotliStreamBuffer { data: ptr::null_mut(), len: 0 }
}

/// Copy out and release a library-owned buffer.
unsafe fn take(buf: &mut BrotliStreamBuffer) -> Vec<u8> {
    let v = if buf.data.is_null() { Vec::new() } else { slice::from_raw_parts(buf.data, buf.len).to_vec() };
    brotli_stream_buffer_free(buf);
    v
}

unsafe fn last_error() -> String {
    CStr::from_ptr(brotli_stream_last_error()).to_string_lossy().into_owned()
}

#[test]
fn version_is_exported() {
    assert_eq!(brotli_stream_version_number(), VERSION_NUMBER);
}

#[test]
fn encoder_then_decoder_roundtrip() {
    let data = words(30_000, 1);
    unsafe {
        let mut enc: *mut Compressor = ptr::null_mut();
        assert_eq!(brotli_stream_encoder_new(0, 5, 22, 0, &mut enc), BROTLI_STREAM_OK);

        let mut packed = Vec::new();
        let mut buf = empty_buf();
        assert_eq!(brotli_stream_encoder_process(enc, data.as_ptr(), data.len(), &mut buf), 0);
        packed.extend(take(&mut buf));
        assert_eq!(brotli_stream_encoder_flush(enc, &mut buf), 0);
        packed.extend(take(&mut buf));
        assert_eq!(brotli_stream_encoder_finish(enc, &mut buf), 0);
        packed.extend(take(&mut buf));

        let mut flag: c_int = 0;
        assert_eq!(brotli_stream_encoder_is_finished(enc, &mut flag), 0);
        assert_eq!(flag, 1);
        brotli_stream_encoder_free(enc);

        let mut dec: *mut Decompressor = ptr::null_mut();
        assert_eq!(brotli_stream_decoder_new(ptr::null(), 0, &mut dec), 0);
        let mut plain = Vec::new();
        assert_eq!(brotli_stream_decoder_process(dec, packed.as_ptr(), packed.len(), 1024, &mut buf), 0);
        plain.extend(take(&mut buf));
        loop {
            assert_eq!(brotli_stream_decoder_can_accept_more_data(dec, &mut flag), 0);
            if flag == 1 {
                break;
            }
            assert_eq!(brotli_stream_decoder_process(dec, ptr::null(), 0, 1024, &mut buf), 0);
            plain.extend(take(&mut buf));
        }
        assert_eq!(brotli_stream_decoder_is_finished(dec, &mut flag), 0);
        assert_eq!(flag, 1);
        assert_eq!(brotli_stream_decoder_finish(dec), 0);
        brotli_stream_decoder_free(dec);

        assert_eq!(plain, data);
        assert_eq!(decompress(&packed).unwrap(), data);
    }
}

#[test]
fn invalid_params_report_code_and_message() {
    unsafe {
        let mut enc: *mut Compressor = ptr::null_mut();
        let rc = brotli_stream_encoder_new(0, 12, 22, 0, &mut enc);
        assert_eq!(rc, 1);
        assert!(enc.is_null());
        assert!(last_error().contains("not a valid quality"));

        assert_eq!(brotli_stream_encoder_new(7, 5, 22, 0, &mut enc), 1);
        assert!(last_error().contains("not a valid encoder mode"));
    }
}

#[test]
fn null_handles_are_parameter_errors() {
    unsafe {
        let mut buf = empty_buf();
        assert_eq!(brotli_stream_encoder_flush(ptr::null(), &mut buf), 1);
        assert!(last_error().contains("must not be null"));
        assert_eq!(brotli_stream_decoder_finish(ptr::null()), 1);
        brotli_stream_encoder_free(ptr::null_mut());
        brotli_stream_decoder_free(ptr::null_mut());
        brotli_stream_buffer_free(ptr::null_mut());
    }
}

#[test]
fn decoder_errors_map_to_codes() {
    unsafe {
        let mut dec: *mut Decompressor = ptr::null_mut();
        assert_eq!(brotli_stream_decoder_new(ptr::null(), 0, &mut dec), 0);
        assert_eq!(brotli_stream_decoder_finish(dec), 5);
        assert!(last_error().contains("incomplete"));

        let garbage = b"some random garbage";
        let mut buf = empty_buf();
        assert_eq!(brotli_stream_decoder_process(dec, garbage.as_ptr(), garbage.len(), 0, &mut buf), 2);
        assert_eq!(brotli_stream_decoder_process(dec, ptr::null(), 0, 0, &mut buf), 3);
        brotli_stream_decoder_free(dec);
    }
}

#[test]
fn finished_encoder_is_invalid_state() {
    unsafe {
        let mut enc: *mut Compressor = ptr::null_mut();
        assert_eq!(brotli_stream_encoder_new(1, 1, 16, 16, &mut enc), 0);
        let mut buf = empty_buf();
        assert_eq!(brotli_stream_encoder_finish(enc, &mut buf), 0);
        take(&mut buf);
        assert_eq!(brotli_stream_encoder_finish(enc, &mut buf), 3);
        assert!(last_error().contains("finished"));
        brotli_stream_encoder_free(enc);
    }
}
