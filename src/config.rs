// config.rs — Compile-time defaults for encoder parameters and the CLI.
//
// The numeric parameter bounds live here so the validator, the C ABI and
// the CLI help text agree on a single set of values.

// Default encoder quality (densest, slowest).
// Can be overridden by the BROTLI_QUALITY environment variable at runtime,
// or by the -q command-line flag.
pub const QUALITY_DEFAULT: u32 = 11;
pub const QUALITY_MIN: u32 = 0;
pub const QUALITY_MAX: u32 = 11;

// Base-2 logarithm of the sliding window size.
pub const LGWIN_DEFAULT: u32 = 22;
pub const LGWIN_MIN: u32 = 10;
pub const LGWIN_MAX: u32 = 24;

// Base-2 logarithm of the maximum input block size.
// 0 lets the encoder derive it from the quality.
pub const LGBLOCK_DEFAULT: u32 = 0;
pub const LGBLOCK_MIN: u32 = 16;
pub const LGBLOCK_MAX: u32 = 24;

// Environment variable consulted by the CLI when -q is absent.
pub const ENV_QUALITY: &str = "BROTLI_QUALITY";

// Chunk size used by the stream helpers when reading input (4 MiB).
// Can be overridden with --chunk-size.
pub const CHUNK_SIZE_DEFAULT: usize = 4 << 20;

// Output-buffer sizing for the drain loops.
// An empty-input pass starts at 32 KiB and doubles per iteration up to 16 MiB;
// a pass with input reserves INPUT_EXPANSION_FACTOR bytes per input byte.
pub const EMPTY_INPUT_BASE_SHIFT: u32 = 15;
pub const EMPTY_INPUT_MAX_SHIFT: u32 = 24;
pub const INPUT_EXPANSION_FACTOR: usize = 5;

// Suffix appended to compressed file names.
pub const BROTLI_EXTENSION: &str = ".br";
