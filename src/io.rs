//! Reader-to-writer streaming on top of [`Compressor`](crate::Compressor) and
//! [`Decompressor`](crate::Decompressor).
//!
//! | Submodule   | Responsibility |
//! |-------------|----------------|
//! | [`stream`]  | `compress_stream` / `decompress_stream` chunk pumps and [`StreamStats`]. |
//! | [`file_io`] | Opening sources and destinations, `-` for stdin/stdout, `.br` naming. |

pub mod file_io;
pub mod stream;

pub use file_io::{compressed_name, decompressed_name, open_dst, open_src, STDIO_MARK};
pub use stream::{compress_stream, decompress_stream, StreamOptions, StreamStats};
