//! Chunked pumps from a `Read` into a `Write` through the stream codecs.

use std::io::{ErrorKind, Read, Write};

use crate::config::CHUNK_SIZE_DEFAULT;
use crate::decoder::Decompressor;
use crate::encoder::Compressor;
use crate::error::{BrotliError, Result};
use crate::params::EncoderParams;

/// Knobs for [`compress_stream`] and [`decompress_stream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOptions {
    /// Bytes read from the source per codec call.
    pub chunk_size: usize,
    /// Compression only: flush after every chunk so the output is decodable
    /// at each chunk boundary.
    pub flush_each_chunk: bool,
    /// Decompression only: cap on bytes produced per codec call.
    pub output_limit: Option<usize>,
}

impl Default for StreamOptions {
    fn default() -> Self {
        StreamOptions {
            chunk_size: CHUNK_SIZE_DEFAULT,
            flush_each_chunk: false,
            output_limit: None,
        }
    }
}

/// Byte counts for one completed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl StreamStats {
    /// `bytes_out / bytes_in`, or 0.0 for an empty source.
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            self.bytes_out as f64 / self.bytes_in as f64
        }
    }
}

/// Fill `buf` from `src` as far as possible; returns bytes read (0 at EOF).
fn read_chunk<R: Read + ?Sized>(src: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

fn chunk_buffer(opts: &StreamOptions) -> Result<Vec<u8>> {
    if opts.chunk_size == 0 {
        return Err(BrotliError::Parameter("chunk size must be greater than 0".into()));
    }
    crate::growth::reserve_output(opts.chunk_size)
}

/// Compress everything readable from `src` into `dst`.
pub fn compress_stream<R, W>(
    src: &mut R,
    dst: &mut W,
    params: &EncoderParams,
    opts: &StreamOptions,
) -> Result<StreamStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let compressor = Compressor::new(params)?;
    let mut buf = chunk_buffer(opts)?;
    let mut stats = StreamStats::default();

    loop {
        let n = read_chunk(src, &mut buf)?;
        if n == 0 {
            break;
        }
        stats.bytes_in += n as u64;
        let mut out = compressor.process(&buf[..n])?;
        if opts.flush_each_chunk {
            out.extend(compressor.flush()?);
        }
        dst.write_all(&out)?;
        stats.bytes_out += out.len() as u64;
    }

    let tail = compressor.finish()?;
    dst.write_all(&tail)?;
    dst.flush()?;
    stats.bytes_out += tail.len() as u64;
    log::debug!(
        "compressed {} -> {} bytes ({:.2}%)",
        stats.bytes_in,
        stats.bytes_out,
        stats.ratio() * 100.0
    );
    Ok(stats)
}

/// Decompress everything readable from `src` into `dst`.
///
/// A source that ends before the compressed stream does yields
/// [`BrotliError::IncompleteStream`].
pub fn decompress_stream<R, W>(
    src: &mut R,
    dst: &mut W,
    dictionary: &[u8],
    opts: &StreamOptions,
) -> Result<StreamStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let decompressor = Decompressor::with_dictionary(dictionary)?;
    let mut buf = chunk_buffer(opts)?;
    let mut stats = StreamStats::default();

    loop {
        let n = read_chunk(src, &mut buf)?;
        if n == 0 {
            break;
        }
        stats.bytes_in += n as u64;

        let mut out = decompressor.process(&buf[..n], opts.output_limit)?;
        loop {
            dst.write_all(&out)?;
            stats.bytes_out += out.len() as u64;
            if decompressor.can_accept_more_data()? {
                break;
            }
            out = decompressor.process(&[], opts.output_limit)?;
        }
    }

    decompressor.finish()?;
    dst.flush()?;
    log::debug!("decompressed {} -> {} bytes", stats.bytes_in, stats.bytes_out);
    Ok(stats)
}
