//! Plan execution.
//!
//! Each plan gets its own codec instance, so plans can run on a rayon pool
//! without sharing state. Plans that write to stdout always run sequentially.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::Context;
use rayon::prelude::*;

use super::args::Args;
use super::op_mode::{plan, OpMode, Plan, Target};
use crate::io::{compress_stream, decompress_stream, open_dst, open_src, StreamOptions, StreamStats};
use crate::params::EncoderParams;

/// Settings shared by every plan of one invocation.
#[derive(Debug, Clone)]
pub struct Job {
    pub mode: OpMode,
    pub params: EncoderParams,
    pub opts: StreamOptions,
    pub dictionary: Vec<u8>,
    pub force: bool,
}

impl Job {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let mode = OpMode::from_args(args);
        let params = args.encoder_params();
        params.validate()?;

        let dictionary = match &args.dictionary {
            Some(path) if mode == OpMode::Compress => {
                anyhow::bail!("{}: dictionaries are only supported for decompression", path.display())
            }
            Some(path) => {
                fs::read(path).with_context(|| format!("reading dictionary {}", path.display()))?
            }
            None => Vec::new(),
        };

        Ok(Job {
            mode,
            params,
            opts: args.stream_options(),
            dictionary,
            force: args.force,
        })
    }

    fn run_one(&self, plan: &Plan) -> anyhow::Result<StreamStats> {
        let mut src: Box<dyn Read + Send> = open_src(&plan.src)?;
        let mut dst: Box<dyn Write + Send> = match &plan.dst {
            Target::File(p) => open_dst(p, self.force)?,
            Target::Stdout => Box::new(io::stdout()),
            Target::Discard => Box::new(io::sink()),
        };

        let stats = match self.mode {
            OpMode::Compress => compress_stream(&mut src, &mut dst, &self.params, &self.opts),
            OpMode::Decompress | OpMode::Test => {
                decompress_stream(&mut src, &mut dst, &self.dictionary, &self.opts)
            }
        }
        .with_context(|| format!("{}", plan.src.display()))?;
        drop(dst);

        if plan.remove_src {
            fs::remove_file(&plan.src)
                .with_context(|| format!("removing {}", plan.src.display()))?;
        }
        log::info!(
            "{}: {} -> {} bytes",
            plan.src.display(),
            stats.bytes_in,
            stats.bytes_out
        );
        Ok(stats)
    }
}

/// Run every input named by `args`; returns the number of failed inputs.
pub fn execute(args: &Args) -> anyhow::Result<usize> {
    let job = Job::from_args(args)?;
    let plans = plan(args, job.mode)?;

    let to_stdout = plans.iter().any(|p| p.dst == Target::Stdout);
    let results: Vec<anyhow::Result<StreamStats>> = if args.jobs > 1 && !to_stdout {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs)
            .build()
            .context("building worker pool")?;
        pool.install(|| plans.par_iter().map(|p| job.run_one(p)).collect())
    } else {
        plans.iter().map(|p| job.run_one(p)).collect()
    };

    let mut failures = 0;
    for r in results {
        if let Err(e) = r {
            log::error!("{e:#}");
            failures += 1;
        }
    }
    Ok(failures)
}
