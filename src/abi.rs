//! C-ABI shims — an opaque-handle API for foreign bindings.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! Every function returns an `int` status: `0` on success, otherwise
//! [`BrotliError::code`]. The message of the most recent failure on the
//! calling thread is available from [`brotli_stream_last_error`].
//!
//! Output bytes are handed over as a [`BrotliStreamBuffer`] that the caller
//! must release with [`brotli_stream_buffer_free`]. Handles may be shared
//! between threads; overlapping calls on one handle report
//! `ConcurrentAccess` instead of blocking.

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::{c_char, c_int, c_uint};
use std::ptr;
use std::slice;

use crate::decoder::Decompressor;
use crate::encoder::Compressor;
use crate::error::{BrotliError, Result};
use crate::params::EncoderParams;

pub const BROTLI_STREAM_OK: c_int = 0;

// ─── helpers ─────────────────────────────────────────────────────────────────

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(err: &BrotliError) {
    let msg = CString::new(err.to_string().replace('\0', " ")).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(msg));
}

/// Convert a result to a status code, recording the message on failure.
fn status(r: Result<()>) -> c_int {
    match r {
        Ok(()) => BROTLI_STREAM_OK,
        Err(e) => {
            set_last_error(&e);
            e.code()
        }
    }
}

fn null_arg(name: &str) -> BrotliError {
    BrotliError::Parameter(format!("{name} must not be null"))
}

/// Borrow `len` bytes at `data`; a null pointer is only accepted with `len == 0`.
unsafe fn input_slice<'a>(data: *const u8, len: usize) -> Result<&'a [u8]> {
    if len == 0 {
        return Ok(&[]);
    }
    if data.is_null() {
        return Err(null_arg("input"));
    }
    Ok(slice::from_raw_parts(data, len))
}

/// Output bytes owned by the library until passed to `brotli_stream_buffer_free`.
#[repr(C)]
#[derive(Debug)]
pub struct BrotliStreamBuffer {
    pub data: *mut u8,
    pub len: usize,
}

impl BrotliStreamBuffer {
    fn from_vec(v: Vec<u8>) -> Self {
        if v.is_empty() {
            return BrotliStreamBuffer { data: ptr::null_mut(), len: 0 };
        }
        let boxed = v.into_boxed_slice();
        let len = boxed.len();
        let data = Box::into_raw(boxed) as *mut u8;
        BrotliStreamBuffer { data, len }
    }
}

unsafe fn emit(out: *mut BrotliStreamBuffer, r: Result<Vec<u8>>) -> Result<()> {
    let bytes = r?;
    *out = BrotliStreamBuffer::from_vec(bytes);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Library-level entry points
// ─────────────────────────────────────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn brotli_stream_version_number() -> c_uint {
    crate::version_number()
}

/// Message for the last failed call on this thread, or null if none.
/// The pointer is valid until the next failing call on the same thread.
#[no_mangle]
pub extern "C" fn brotli_stream_last_error() -> *const c_char {
    LAST_ERROR.with(|slot| match slot.borrow().as_ref() {
        Some(msg) => msg.as_ptr(),
        None => ptr::null(),
    })
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_buffer_free(buf: *mut BrotliStreamBuffer) {
    if buf.is_null() {
        return;
    }
    let b = &mut *buf;
    if !b.data.is_null() {
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(b.data, b.len)));
    }
    b.data = ptr::null_mut();
    b.len = 0;
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoder handle
// ─────────────────────────────────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_encoder_new(
    mode: c_uint,
    quality: c_uint,
    lgwin: c_uint,
    lgblock: c_uint,
    out_handle: *mut *mut Compressor,
) -> c_int {
    status((|| -> Result<()> {
        if out_handle.is_null() {
            return Err(null_arg("out_handle"));
        }
        let params = EncoderParams::from_raw(mode, quality, lgwin, lgblock)?;
        let enc = Compressor::new(&params)?;
        *out_handle = Box::into_raw(Box::new(enc));
        Ok(())
    })())
}

unsafe fn encoder_ref<'a>(h: *const Compressor) -> Result<&'a Compressor> {
    h.as_ref().ok_or_else(|| null_arg("encoder handle"))
}

unsafe fn decoder_ref<'a>(h: *const Decompressor) -> Result<&'a Decompressor> {
    h.as_ref().ok_or_else(|| null_arg("decoder handle"))
}

unsafe fn check_out(out: *mut BrotliStreamBuffer) -> Result<()> {
    if out.is_null() {
        return Err(null_arg("out"));
    }
    Ok(())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_encoder_process(
    handle: *const Compressor,
    input: *const u8,
    input_len: usize,
    out: *mut BrotliStreamBuffer,
) -> c_int {
    status((|| -> Result<()> {
        let enc = encoder_ref(handle)?;
        check_out(out)?;
        let data = input_slice(input, input_len)?;
        emit(out, enc.process(data))
    })())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_encoder_flush(
    handle: *const Compressor,
    out: *mut BrotliStreamBuffer,
) -> c_int {
    status((|| -> Result<()> {
        let enc = encoder_ref(handle)?;
        check_out(out)?;
        emit(out, enc.flush())
    })())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_encoder_finish(
    handle: *const Compressor,
    out: *mut BrotliStreamBuffer,
) -> c_int {
    status((|| -> Result<()> {
        let enc = encoder_ref(handle)?;
        check_out(out)?;
        emit(out, enc.finish())
    })())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_encoder_is_finished(
    handle: *const Compressor,
    out_flag: *mut c_int,
) -> c_int {
    status((|| -> Result<()> {
        let enc = encoder_ref(handle)?;
        let flag = out_flag.as_mut().ok_or_else(|| null_arg("out_flag"))?;
        *flag = enc.is_finished()? as c_int;
        Ok(())
    })())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_encoder_free(handle: *mut Compressor) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoder handle
// ─────────────────────────────────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_decoder_new(
    dictionary: *const u8,
    dictionary_len: usize,
    out_handle: *mut *mut Decompressor,
) -> c_int {
    status((|| -> Result<()> {
        if out_handle.is_null() {
            return Err(null_arg("out_handle"));
        }
        let dict = input_slice(dictionary, dictionary_len)?;
        let dec = Decompressor::with_dictionary(dict)?;
        *out_handle = Box::into_raw(Box::new(dec));
        Ok(())
    })())
}

/// `output_limit == 0` means unlimited.
#[no_mangle]
pub unsafe extern "C" fn brotli_stream_decoder_process(
    handle: *const Decompressor,
    input: *const u8,
    input_len: usize,
    output_limit: usize,
    out: *mut BrotliStreamBuffer,
) -> c_int {
    status((|| -> Result<()> {
        let dec = decoder_ref(handle)?;
        check_out(out)?;
        let data = input_slice(input, input_len)?;
        let limit = (output_limit != 0).then_some(output_limit);
        emit(out, dec.process(data, limit))
    })())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_decoder_finish(handle: *const Decompressor) -> c_int {
    status((|| -> Result<()> { decoder_ref(handle)?.finish().map(drop) })())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_decoder_is_finished(
    handle: *const Decompressor,
    out_flag: *mut c_int,
) -> c_int {
    status((|| -> Result<()> {
        let dec = decoder_ref(handle)?;
        let flag = out_flag.as_mut().ok_or_else(|| null_arg("out_flag"))?;
        *flag = dec.is_finished()? as c_int;
        Ok(())
    })())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_decoder_can_accept_more_data(
    handle: *const Decompressor,
    out_flag: *mut c_int,
) -> c_int {
    status((|| -> Result<()> {
        let dec = decoder_ref(handle)?;
        let flag = out_flag.as_mut().ok_or_else(|| null_arg("out_flag"))?;
        *flag = dec.can_accept_more_data()? as c_int;
        Ok(())
    })())
}

#[no_mangle]
pub unsafe extern "C" fn brotli_stream_decoder_free(handle: *mut Decompressor) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}
