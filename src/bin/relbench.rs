//! relbench: run a built-in sample workload under the benchmark harness.
//!
//! Mostly a demonstration of the library surface: pick a workload, set the
//! iteration count, and read the timing summary. For benchmarking your own
//! code, depend on the library and pass your own closure.
//!
//! Example:
//!     relbench sort --iterations 500
//!     relbench format --json
//!     relbench --list

use anyhow::Result;
use clap::{Parser, ValueEnum};
use relbench::{BenchRunner, ConsoleReporter, RunnerConfig, DEFAULT_ITERATIONS};
use std::hint::black_box;

#[derive(Debug, Parser)]
#[command(
    name = "relbench",
    about = "Run a built-in sample workload under the benchmark harness"
)]
struct Cli {
    /// Workload to benchmark
    #[arg(value_enum, default_value = "spin")]
    workload: Workload,

    /// Number of times to execute the workload
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Label for the run (defaults to the workload name)
    #[arg(long)]
    name: Option<String>,

    /// Print the run summary as JSON after the console report
    #[arg(long)]
    json: bool,

    /// Disable ANSI color in the console report
    #[arg(long)]
    no_color: bool,

    /// List available workloads and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Workload {
    /// Arithmetic loop, no allocation
    Spin,
    /// Heap allocation and growth
    Alloc,
    /// String formatting
    Format,
    /// Sorting a reversed vector
    Sort,
}

impl Workload {
    const ALL: [Workload; 4] = [
        Workload::Spin,
        Workload::Alloc,
        Workload::Format,
        Workload::Sort,
    ];

    fn label(self) -> &'static str {
        match self {
            Workload::Spin => "spin",
            Workload::Alloc => "alloc",
            Workload::Format => "format",
            Workload::Sort => "sort",
        }
    }

    fn execute(self) {
        match self {
            Workload::Spin => {
                let mut acc: u64 = 0;
                for i in 0..10_000u64 {
                    acc = acc.wrapping_add(i * i);
                }
                black_box(acc);
            }
            Workload::Alloc => {
                let mut buf = Vec::new();
                for i in 0..4096u32 {
                    buf.push(i as u8);
                }
                black_box(&buf);
            }
            Workload::Format => {
                let mut out = String::new();
                for i in 0..256 {
                    out.push_str(&format!("item-{i:04}"));
                }
                black_box(&out);
            }
            Workload::Sort => {
                let mut v: Vec<u32> = (0..4096).rev().collect();
                v.sort_unstable();
                black_box(&v);
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for w in Workload::ALL {
            println!("{}", w.label());
        }
        return Ok(());
    }

    let name = cli
        .name
        .clone()
        .unwrap_or_else(|| cli.workload.label().to_string());

    let mut reporter = ConsoleReporter::new().color(!cli.no_color);
    let config = RunnerConfig::from_env();
    let mut runner =
        BenchRunner::with_config(cli.iterations, Some(name.as_str()), config, &mut reporter)?;
    runner.run(|| cli.workload.execute())?;

    if cli.json {
        let summary = runner.summary()?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
