//! Encoder parameters and their validation.
//!
//! [`EncoderParams::validate`] runs before any native encoder state is created,
//! so an out-of-range value never reaches the codec.

use std::fmt;
use std::str::FromStr;

use crate::config::{
    LGBLOCK_DEFAULT, LGBLOCK_MAX, LGBLOCK_MIN, LGWIN_DEFAULT, LGWIN_MAX, LGWIN_MIN,
    QUALITY_DEFAULT, QUALITY_MAX, QUALITY_MIN,
};
use crate::error::{BrotliError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Encoder mode
// ─────────────────────────────────────────────────────────────────────────────

/// Hint to the encoder about the kind of input it will see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum EncoderMode {
    /// Nothing is known about the input in advance.
    #[default]
    Generic = 0,
    /// UTF-8 text.
    Text = 1,
    /// WOFF 2.0 font data.
    Font = 2,
}

pub const DEFAULT_MODE: EncoderMode = EncoderMode::Generic;

impl EncoderMode {
    pub const ALL: [EncoderMode; 3] = [EncoderMode::Generic, EncoderMode::Text, EncoderMode::Font];

    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            EncoderMode::Generic => "generic",
            EncoderMode::Text => "text",
            EncoderMode::Font => "font",
        }
    }
}

impl fmt::Display for EncoderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for EncoderMode {
    type Error = BrotliError;

    fn try_from(raw: u32) -> Result<Self> {
        match raw {
            0 => Ok(EncoderMode::Generic),
            1 => Ok(EncoderMode::Text),
            2 => Ok(EncoderMode::Font),
            other => Err(BrotliError::Parameter(format!("{other} is not a valid encoder mode"))),
        }
    }
}

impl FromStr for EncoderMode {
    type Err = BrotliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(EncoderMode::Generic),
            "text" => Ok(EncoderMode::Text),
            "font" => Ok(EncoderMode::Font),
            _ => Err(BrotliError::Parameter(format!("{s} is not a valid encoder mode"))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric parameter checks
// ─────────────────────────────────────────────────────────────────────────────

pub fn validate_quality(quality: u32) -> Result<u32> {
    if !(QUALITY_MIN..=QUALITY_MAX).contains(&quality) {
        return Err(BrotliError::Parameter(format!(
            "{quality} is not a valid quality, must be between {QUALITY_MIN} and {QUALITY_MAX}"
        )));
    }
    Ok(quality)
}

pub fn validate_lgwin(lgwin: u32) -> Result<u32> {
    if !(LGWIN_MIN..=LGWIN_MAX).contains(&lgwin) {
        return Err(BrotliError::Parameter(format!(
            "{lgwin} is not a valid lgwin, must be between {LGWIN_MIN} and {LGWIN_MAX}"
        )));
    }
    Ok(lgwin)
}

pub fn validate_lgblock(lgblock: u32) -> Result<u32> {
    if lgblock != 0 && !(LGBLOCK_MIN..=LGBLOCK_MAX).contains(&lgblock) {
        return Err(BrotliError::Parameter(format!(
            "{lgblock} is not a valid lgblock, must be either 0 or between {LGBLOCK_MIN} and {LGBLOCK_MAX}"
        )));
    }
    Ok(lgblock)
}

// ─────────────────────────────────────────────────────────────────────────────
// EncoderParams
// ─────────────────────────────────────────────────────────────────────────────

/// Tunables applied to a fresh encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderParams {
    pub mode: EncoderMode,
    /// 0 (fastest) to 11 (densest).
    pub quality: u32,
    /// log2 of the sliding window, 10 to 24.
    pub lgwin: u32,
    /// log2 of the maximum input block, 0 (automatic) or 16 to 24.
    pub lgblock: u32,
}

impl Default for EncoderParams {
    fn default() -> Self {
        EncoderParams {
            mode: DEFAULT_MODE,
            quality: QUALITY_DEFAULT,
            lgwin: LGWIN_DEFAULT,
            lgblock: LGBLOCK_DEFAULT,
        }
    }
}

impl EncoderParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: EncoderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_lgwin(mut self, lgwin: u32) -> Self {
        self.lgwin = lgwin;
        self
    }

    pub fn with_lgblock(mut self, lgblock: u32) -> Self {
        self.lgblock = lgblock;
        self
    }

    /// Check every field; the first offending value is reported.
    pub fn validate(&self) -> Result<()> {
        validate_quality(self.quality)?;
        validate_lgwin(self.lgwin)?;
        validate_lgblock(self.lgblock)?;
        Ok(())
    }

    /// Build from raw integers as received over the C ABI.
    pub fn from_raw(mode: u32, quality: u32, lgwin: u32, lgblock: u32) -> Result<Self> {
        let params = EncoderParams {
            mode: EncoderMode::try_from(mode)?,
            quality,
            lgwin,
            lgblock,
        };
        params.validate()?;
        Ok(params)
    }
}
