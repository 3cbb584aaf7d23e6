//! Argument definitions for the `brotli` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    CHUNK_SIZE_DEFAULT, ENV_QUALITY, LGBLOCK_DEFAULT, LGWIN_DEFAULT, QUALITY_DEFAULT,
};
use crate::io::StreamOptions;
use crate::params::{EncoderMode, EncoderParams};

/// Compress or decompress files with Brotli.
///
/// With no INPUT, or when INPUT is `-`, reads standard input.
#[derive(Parser, Debug, Clone)]
#[command(name = "brotli")]
#[command(version)]
pub struct Args {
    /// Decompress instead of compressing.
    #[arg(short = 'd', long)]
    pub decompress: bool,

    /// Decompress and discard the output; only check integrity.
    #[arg(short = 't', long, conflicts_with = "output")]
    pub test: bool,

    /// Write to standard output.
    #[arg(short = 'c', long)]
    pub stdout: bool,

    /// Output file (single input only).
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite existing output files.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Remove each source file after it was processed successfully.
    #[arg(long)]
    pub rm: bool,

    /// Compression quality, 0 (fastest) to 11 (densest).
    #[arg(short = 'q', long, env = ENV_QUALITY, default_value_t = QUALITY_DEFAULT)]
    pub quality: u32,

    /// Base-2 logarithm of the sliding window size, 10 to 24.
    #[arg(short = 'w', long, default_value_t = LGWIN_DEFAULT)]
    pub lgwin: u32,

    /// Base-2 logarithm of the maximum input block size, 0 or 16 to 24.
    #[arg(long, default_value_t = LGBLOCK_DEFAULT)]
    pub lgblock: u32,

    /// Encoder mode: generic, text or font.
    #[arg(long, default_value = "generic")]
    pub mode: EncoderMode,

    /// Bytes read from the input per codec call.
    #[arg(long, default_value_t = CHUNK_SIZE_DEFAULT)]
    pub chunk_size: usize,

    /// Flush the encoder after every chunk.
    #[arg(long)]
    pub flush: bool,

    /// Maximum bytes produced per decoder call.
    #[arg(long, value_name = "BYTES")]
    pub output_limit: Option<usize>,

    /// Raw dictionary the stream was compressed against (decompression only).
    #[arg(short = 'D', long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Number of files processed in parallel.
    #[arg(short = 'j', long, default_value_t = 1)]
    pub jobs: usize,

    /// Input files.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,
}

impl Args {
    pub fn encoder_params(&self) -> EncoderParams {
        EncoderParams::new()
            .with_mode(self.mode)
            .with_quality(self.quality)
            .with_lgwin(self.lgwin)
            .with_lgblock(self.lgblock)
    }

    pub fn stream_options(&self) -> StreamOptions {
        StreamOptions {
            chunk_size: self.chunk_size,
            flush_each_chunk: self.flush,
            output_limit: self.output_limit,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
