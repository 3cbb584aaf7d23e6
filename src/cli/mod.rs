//! Command-line interface for the `brotli` binary.
//!
//! | Submodule   | Responsibility |
//! |-------------|----------------|
//! | [`args`]    | `Args` — clap definition of every flag, plus conversion to encoder parameters and stream options. |
//! | [`op_mode`] | `OpMode` and the per-input `Plan` (source, destination, whether to remove the source). |
//! | [`run`]     | Executes plans sequentially or on a rayon pool, one codec instance per input. |
//!
//! Typical call sequence: `Args::parse` → `op_mode::plan` → `run::execute`.

pub mod args;
pub mod op_mode;
pub mod run;
