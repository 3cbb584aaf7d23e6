//! Operation selection and per-input output planning.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail};

use super::args::Args;
use crate::io::file_io::is_stdio;
use crate::io::{compressed_name, decompressed_name, STDIO_MARK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    Compress,
    Decompress,
    Test,
}

impl OpMode {
    pub fn from_args(args: &Args) -> Self {
        if args.test {
            OpMode::Test
        } else if args.decompress {
            OpMode::Decompress
        } else {
            OpMode::Compress
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Stdout,
    Discard,
}

/// What to do with one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub src: PathBuf,
    pub dst: Target,
    /// Delete `src` once `dst` is complete.
    pub remove_src: bool,
}

/// Resolve every input to a destination.
pub fn plan(args: &Args, mode: OpMode) -> anyhow::Result<Vec<Plan>> {
    let inputs: Vec<PathBuf> = if args.inputs.is_empty() {
        vec![PathBuf::from(STDIO_MARK)]
    } else {
        args.inputs.clone()
    };

    if args.output.is_some() && inputs.len() > 1 {
        bail!("--output can only be used with a single input");
    }

    inputs
        .into_iter()
        .map(|src| {
            let dst = target_for(args, mode, &src)?;
            let remove_src = args.rm && !is_stdio(&src) && dst != Target::Stdout;
            Ok(Plan { src, dst, remove_src })
        })
        .collect()
}

fn target_for(args: &Args, mode: OpMode, src: &Path) -> anyhow::Result<Target> {
    if mode == OpMode::Test {
        return Ok(Target::Discard);
    }
    if let Some(out) = &args.output {
        return Ok(if is_stdio(out) { Target::Stdout } else { Target::File(out.clone()) });
    }
    if args.stdout || is_stdio(src) {
        return Ok(Target::Stdout);
    }
    match mode {
        OpMode::Compress => Ok(Target::File(compressed_name(src))),
        OpMode::Decompress => decompressed_name(src)
            .map(Target::File)
            .ok_or_else(|| anyhow!("{}: unknown suffix -- ignored", src.display())),
        OpMode::Test => Ok(Target::Discard),
    }
}
